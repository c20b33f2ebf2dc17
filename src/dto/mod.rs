pub mod annual_total_row;
pub mod dashboard_filter;
pub mod product_name_row;
pub mod product_total_row;
pub mod product_trend_row;
pub mod sale_amount_row;
