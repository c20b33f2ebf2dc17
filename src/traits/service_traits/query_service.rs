use crate::common::*;

use crate::dto::{
    annual_total_row::*, dashboard_filter::*, product_name_row::*, product_total_row::*,
    product_trend_row::*, sale_amount_row::*,
};

#[async_trait]
pub trait QueryService: Send + Sync {
    async fn get_product_names(&self) -> anyhow::Result<Vec<ProductNameRow>>;
    async fn get_product_trend(
        &self,
        filter: &DashboardFilter,
    ) -> anyhow::Result<Vec<ProductTrendRow>>;
    async fn get_product_totals(
        &self,
        filter: &DashboardFilter,
    ) -> anyhow::Result<Vec<ProductTotalRow>>;
    async fn get_annual_totals(
        &self,
        filter: &DashboardFilter,
    ) -> anyhow::Result<Vec<AnnualTotalRow>>;
    async fn get_sale_amounts(
        &self,
        filter: &DashboardFilter,
    ) -> anyhow::Result<Vec<SaleAmountRow>>;
}
