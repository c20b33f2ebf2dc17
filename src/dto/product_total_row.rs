use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    제품별 매출 총합 집계 결과를 담는 DTO

    # Fields
    * `product_name` - 제품명
    * `total_amount` - 제품의 매출 합계
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
pub struct ProductTotalRow {
    pub product_name: String,
    pub total_amount: f64,
}

impl FromSqlRow for ProductTotalRow {
    fn from_sql_row(row: &Row) -> anyhow::Result<Self> {
        let product_name: String = row
            .try_get::<&str, _>("product_name")?
            .ok_or_else(|| {
                anyhow!("[ProductTotalRow->from_sql_row] 'product_name' is missing or null")
            })?
            .to_string();

        let total_amount: f64 = row.try_get::<f64, _>("total_amount")?.ok_or_else(|| {
            anyhow!("[ProductTotalRow->from_sql_row] 'total_amount' is missing or null")
        })?;

        Ok(ProductTotalRow::new(product_name, total_amount))
    }
}
