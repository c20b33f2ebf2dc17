mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::warehouse_repository_impl::*;

mod env_configuration;

mod traits;

mod model;
use model::configs::{dashboard_config::*, total_config::*};

mod dto;
mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, query_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* Global logger and environment setup */
    dotenv().ok();
    set_global_logger();

    info!("Pharma sales dashboard start!");

    /* Warehouse connection pool */
    let warehouse_conn: WarehouseRepositoryImpl =
        WarehouseRepositoryImpl::new(get_warehouse_config_info()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing warehouse_conn.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let query_service: QueryServiceImpl<WarehouseRepositoryImpl> = QueryServiceImpl::new(
        Arc::new(warehouse_conn),
        get_warehouse_config_info().qualified_sales_table(),
    );

    let dashboard_config: &DashboardConfig = get_dashboard_config_info();
    let chart_service: ChartServiceImpl =
        ChartServiceImpl::new(*dashboard_config.chart_width(), *dashboard_config.chart_height());

    let main_controller: MainController<QueryServiceImpl<WarehouseRepositoryImpl>, ChartServiceImpl> =
        MainController::new(
            query_service,
            chart_service,
            *dashboard_config.histogram_bin_count(),
        );

    main_controller.run_server().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
