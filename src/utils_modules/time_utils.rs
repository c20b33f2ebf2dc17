use crate::common::*;

#[doc = "`YYYY-MM-DD` 문자열을 파싱하는 함수. 형식이 잘못되면 None"]
pub fn parse_date_opt(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[doc = "SQL 리터럴로 사용할 `YYYY-MM-DD` 문자열을 반환하는 함수"]
pub fn format_date_sql(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_date_parses() {
        assert_eq!(
            parse_date_opt("2024-03-09"),
            Some(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        );
    }

    #[test]
    fn malformed_date_is_none() {
        assert_eq!(parse_date_opt("2024/03/09"), None);
        assert_eq!(parse_date_opt("2024-13-01"), None);
        assert_eq!(parse_date_opt(""), None);
    }

    #[test]
    fn sql_format_round_trips() {
        let date: NaiveDate = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(format_date_sql(date), "2023-12-31");
    }
}
