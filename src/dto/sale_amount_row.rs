use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = "히스토그램 구간화 대상이 되는 개별 매출 금액 DTO"]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
pub struct SaleAmountRow {
    pub sale_amount: f64,
}

impl FromSqlRow for SaleAmountRow {
    fn from_sql_row(row: &Row) -> anyhow::Result<Self> {
        let sale_amount: f64 = row.try_get::<f64, _>("sale_amount")?.ok_or_else(|| {
            anyhow!("[SaleAmountRow->from_sql_row] 'sale_amount' is missing or null")
        })?;

        Ok(SaleAmountRow::new(sale_amount))
    }
}
