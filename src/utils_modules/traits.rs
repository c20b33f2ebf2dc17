use crate::common::*;

/* 웨어하우스 행 → 도메인 DTO 변환을 위한 공통 트레이트 */
pub trait FromSqlRow
where
    Self: Sized,
{
    fn from_sql_row(row: &Row) -> anyhow::Result<Self>;
}
