use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    연도별 매출 총합 집계 결과를 담는 DTO

    # Fields
    * `sale_year` - 집계 연도
    * `total_amount` - 해당 연도의 매출 합계
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
pub struct AnnualTotalRow {
    pub sale_year: i32,
    pub total_amount: f64,
}

impl FromSqlRow for AnnualTotalRow {
    fn from_sql_row(row: &Row) -> anyhow::Result<Self> {
        let sale_year: i32 = row
            .try_get::<i32, _>("sale_year")?
            .ok_or_else(|| anyhow!("[AnnualTotalRow->from_sql_row] 'sale_year' is missing or null"))?;

        let total_amount: f64 = row.try_get::<f64, _>("total_amount")?.ok_or_else(|| {
            anyhow!("[AnnualTotalRow->from_sql_row] 'total_amount' is missing or null")
        })?;

        Ok(AnnualTotalRow::new(sale_year, total_amount))
    }
}
