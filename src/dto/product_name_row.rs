use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = "제품 멀티셀렉트 컨트롤을 채우기 위한 제품명 DTO"]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
pub struct ProductNameRow {
    pub product_name: String,
}

impl FromSqlRow for ProductNameRow {
    fn from_sql_row(row: &Row) -> anyhow::Result<Self> {
        let product_name: String = row
            .try_get::<&str, _>("product_name")?
            .ok_or_else(|| {
                anyhow!("[ProductNameRow->from_sql_row] 'product_name' is missing or null")
            })?
            .to_string();

        Ok(ProductNameRow::new(product_name))
    }
}
