use crate::common::*;

#[doc = "매출 추이 집계에 사용하는 시간 버킷 단위"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    Month,
    Year,
}

impl TimeBucket {
    #[doc = "날짜 컬럼을 버킷 키로 변환하는 SELECT 표현식을 반환하는 함수"]
    pub fn select_expr(&self, date_column: &str) -> String {
        match self {
            /* YYYY-MM, 문자열 정렬이 시간 순서와 일치한다 */
            TimeBucket::Month => format!("CONVERT(VARCHAR(7), {}, 120)", date_column),
            TimeBucket::Year => format!("YEAR({})", date_column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bucket_truncates_to_year_month() {
        assert_eq!(
            TimeBucket::Month.select_expr("sale_date"),
            "CONVERT(VARCHAR(7), sale_date, 120)"
        );
    }

    #[test]
    fn year_bucket_extracts_year() {
        assert_eq!(TimeBucket::Year.select_expr("sale_date"), "YEAR(sale_date)");
    }
}
