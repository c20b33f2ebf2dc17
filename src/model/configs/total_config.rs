use crate::common::*;

use crate::model::configs::{dashboard_config::*, http_server_config::*, warehouse_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub warehouse: WarehouseConfig,
    pub http_server: HttpServerConfig,
    pub dashboard: DashboardConfig,
}

#[doc = "웨어하우스 config 정보"]
pub fn get_warehouse_config_info() -> &'static WarehouseConfig {
    &TOTAL_CONFIG.warehouse
}

#[doc = "HTTP 서버 config 정보"]
pub fn get_http_server_config_info() -> &'static HttpServerConfig {
    &TOTAL_CONFIG.http_server
}

#[doc = "대시보드 설정 정보"]
pub fn get_dashboard_config_info() -> &'static DashboardConfig {
    &TOTAL_CONFIG.dashboard
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
