use crate::common::*;

#[doc = "외부 분석 웨어하우스 접속 정보"]
#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct WarehouseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub schema: String,
    pub sales_table: String,
}

impl WarehouseConfig {
    #[doc = "Fully qualified name of the sales table: database.schema.table"]
    pub fn qualified_sales_table(&self) -> String {
        format!("{}.{}.{}", self.database, self.schema, self.sales_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_sales_table_joins_all_three_parts() {
        let config: WarehouseConfig = WarehouseConfig {
            host: String::from("warehouse.example.com"),
            port: 1433,
            user: String::from("reader"),
            password: String::from("secret"),
            database: String::from("PHARMA_SALES_DB"),
            schema: String::from("SALES_DATA"),
            sales_table: String::from("TABLE_SALES_DAILY"),
        };

        assert_eq!(
            config.qualified_sales_table(),
            "PHARMA_SALES_DB.SALES_DATA.TABLE_SALES_DAILY"
        );
    }
}
