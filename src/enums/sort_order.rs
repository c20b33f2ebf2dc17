use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SortSpec<'a> {
    pub field: &'a str,
    pub order: SortOrder,
}

impl<'a> SortSpec<'a> {
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.field, self.order.as_sql())
    }

    #[doc = "ORDER BY 절을 조립하는 함수. 빈 슬라이스면 빈 문자열 반환"]
    pub fn to_order_by_clause(specs: &[SortSpec<'a>]) -> String {
        if specs.is_empty() {
            return String::new();
        }

        let fields: Vec<String> = specs.iter().map(|spec| spec.to_sql()).collect();
        format!("ORDER BY {}", fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_by_clause_joins_specs_in_order() {
        let specs: Vec<SortSpec> = vec![
            SortSpec { field: "total_amount", order: SortOrder::Desc },
            SortSpec { field: "product_name", order: SortOrder::Asc },
        ];

        assert_eq!(
            SortSpec::to_order_by_clause(&specs),
            "ORDER BY total_amount DESC, product_name ASC"
        );
    }

    #[test]
    fn empty_spec_list_builds_no_clause() {
        assert_eq!(SortSpec::to_order_by_clause(&[]), "");
    }
}
