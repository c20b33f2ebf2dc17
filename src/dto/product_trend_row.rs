use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    월별/제품별 매출 집계 결과를 담는 DTO

    # Fields
    * `product_name` - 제품명
    * `period` - 집계 기간 (YYYY-MM)
    * `total_amount` - 해당 기간의 매출 합계
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
pub struct ProductTrendRow {
    pub product_name: String,
    pub period: String,
    pub total_amount: f64,
}

impl FromSqlRow for ProductTrendRow {
    fn from_sql_row(row: &Row) -> anyhow::Result<Self> {
        let product_name: String = row
            .try_get::<&str, _>("product_name")?
            .ok_or_else(|| {
                anyhow!("[ProductTrendRow->from_sql_row] 'product_name' is missing or null")
            })?
            .to_string();

        let period: String = row
            .try_get::<&str, _>("period")?
            .ok_or_else(|| anyhow!("[ProductTrendRow->from_sql_row] 'period' is missing or null"))?
            .to_string();

        let total_amount: f64 = row.try_get::<f64, _>("total_amount")?.ok_or_else(|| {
            anyhow!("[ProductTrendRow->from_sql_row] 'total_amount' is missing or null")
        })?;

        Ok(ProductTrendRow::new(product_name, period, total_amount))
    }
}
