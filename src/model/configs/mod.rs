pub mod dashboard_config;
pub mod http_server_config;
pub mod total_config;
pub mod warehouse_config;
