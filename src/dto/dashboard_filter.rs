use crate::common::*;

use crate::utils_modules::time_utils::*;

#[doc = r#"
    대시보드 요청 한 건의 필터 상태를 담는 세션 상태 객체.

    매 요청마다 쿼리 스트링에서 새로 파싱되며, 프로세스 전역 상태로는 절대 보관하지 않는다.

    # Fields
    * `products` - 선택된 제품 목록.
        - `None`: 제품 필터 없음 (모든 제품 조회)
        - `Some([])`: 폼이 제출되었지만 아무 제품도 선택되지 않음 (빈 차트 렌더링)
        - `Some([..])`: 선택된 제품들만 조회
    * `start_date` / `end_date` - 조회 기간 경계 (포함), 없으면 전체 기간
"#]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
pub struct DashboardFilter {
    pub products: Option<Vec<String>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DashboardFilter {
    #[doc = r#"
        요청 쿼리 스트링을 파싱하여 필터 상태를 복원하는 함수.

        1. `&` 로 구분된 key=value 쌍을 순회하며 `+` 와 퍼센트 인코딩을 복원
        2. 반복되는 `product` 키는 선택된 제품 목록으로 누적
        3. `product_filter` 마커 키는 "폼이 제출되었음"을 의미한다.
           마커가 있으면서 제품이 하나도 없으면 빈 선택(`Some([])`)으로 해석
        4. `start_date` / `end_date` 는 `YYYY-MM-DD` 로 파싱하며,
           형식이 잘못된 값은 경고 로그 후 무시

        # Arguments
        * `raw_query` - URL 의 쿼리 스트링 (`?` 제외)

        # Returns
        * `DashboardFilter` - 파싱된 필터 상태 (파싱은 실패하지 않는다)
    "#]
    pub fn from_query_str(raw_query: &str) -> Self {
        let mut products: Vec<String> = Vec::new();
        let mut form_submitted: bool = false;
        let mut start_date: Option<NaiveDate> = None;
        let mut end_date: Option<NaiveDate> = None;

        for pair in raw_query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));

            let key: String = Self::decode_component(key);
            let value: String = Self::decode_component(value);

            match key.as_str() {
                "product" => {
                    if !value.is_empty() {
                        products.push(value);
                    }
                }
                "product_filter" => {
                    form_submitted = true;
                }
                "start_date" => {
                    start_date = Self::parse_date_param("start_date", &value);
                }
                "end_date" => {
                    end_date = Self::parse_date_param("end_date", &value);
                }
                _ => {}
            }
        }

        let products: Option<Vec<String>> = if !products.is_empty() {
            Some(products)
        } else if form_submitted {
            Some(Vec::new())
        } else {
            None
        };

        DashboardFilter::new(products, start_date, end_date)
    }

    #[doc = "폼 인코딩(`+` = 공백, 퍼센트 인코딩)을 복원하는 함수"]
    fn decode_component(component: &str) -> String {
        let plus_decoded: String = component.replace('+', " ");

        match url_decode(&plus_decoded) {
            Ok(decoded) => decoded.into_owned(),
            Err(e) => {
                warn!(
                    "[DashboardFilter->decode_component] Invalid percent encoding '{}': {:?}",
                    component, e
                );
                plus_decoded
            }
        }
    }

    #[doc = "날짜 파라미터를 파싱하는 함수. 비어있거나 형식이 잘못된 값은 None 처리"]
    fn parse_date_param(param_name: &str, value: &str) -> Option<NaiveDate> {
        if value.is_empty() {
            return None;
        }

        match parse_date_opt(value) {
            Some(date) => Some(date),
            None => {
                warn!(
                    "[DashboardFilter->parse_date_param] Ignoring malformed '{}' value: {}",
                    param_name, value
                );
                None
            }
        }
    }

    #[doc = "폼이 제출되었지만 선택된 제품이 하나도 없는 상태인지 확인"]
    pub fn is_empty_selection(&self) -> bool {
        matches!(self.products, Some(ref selected) if selected.is_empty())
    }

    #[doc = "해당 제품이 현재 선택 목록에 포함되어 있는지 확인"]
    pub fn contains_product(&self, product_name: &str) -> bool {
        match &self.products {
            Some(selected) => selected.iter().any(|p| p == product_name),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_product_keys_accumulate() {
        let filter: DashboardFilter =
            DashboardFilter::from_query_str("product=Aspirin&product=Ibuprofen&product_filter=on");

        assert_eq!(
            filter.products,
            Some(vec![String::from("Aspirin"), String::from("Ibuprofen")])
        );
    }

    #[test]
    fn percent_and_plus_encoding_are_decoded() {
        let filter: DashboardFilter =
            DashboardFilter::from_query_str("product=Tylenol+PM&product=Co%26Co&product_filter=on");

        assert_eq!(
            filter.products,
            Some(vec![String::from("Tylenol PM"), String::from("Co&Co")])
        );
    }

    #[test]
    fn submitted_form_without_products_is_empty_selection() {
        let filter: DashboardFilter = DashboardFilter::from_query_str("product_filter=on");

        assert_eq!(filter.products, Some(Vec::new()));
        assert!(filter.is_empty_selection());
    }

    #[test]
    fn missing_form_marker_means_no_product_predicate() {
        let filter: DashboardFilter = DashboardFilter::from_query_str("");

        assert_eq!(filter.products, None);
        assert!(!filter.is_empty_selection());
    }

    #[test]
    fn date_range_is_parsed_and_malformed_dates_are_dropped() {
        let filter: DashboardFilter =
            DashboardFilter::from_query_str("start_date=2024-01-01&end_date=not-a-date");

        assert_eq!(
            filter.start_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(filter.end_date, None);
    }

    #[test]
    fn empty_date_values_are_treated_as_absent() {
        let filter: DashboardFilter =
            DashboardFilter::from_query_str("start_date=&end_date=&product_filter=on");

        assert_eq!(filter.start_date, None);
        assert_eq!(filter.end_date, None);
    }

    #[test]
    fn filter_round_trips_through_json() {
        let filter: DashboardFilter = DashboardFilter::from_query_str(
            "product=Aspirin&start_date=2024-01-01&end_date=2024-12-31&product_filter=on",
        );

        let serialized: String = serde_json::to_string(&filter).unwrap();
        let restored: DashboardFilter = serde_json::from_str(&serialized).unwrap();

        assert_eq!(filter, restored);
    }

    #[test]
    fn contains_product_checks_current_selection() {
        let filter: DashboardFilter =
            DashboardFilter::from_query_str("product=Aspirin&product_filter=on");

        assert!(filter.contains_product("Aspirin"));
        assert!(!filter.contains_product("Ibuprofen"));
    }
}
