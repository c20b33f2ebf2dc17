use crate::common::*;

use std::collections::{BTreeMap, BTreeSet};

use axum::{
    Router,
    extract::{RawQuery, State},
    response::Html,
    routing::get,
};
use tokio::net::TcpListener;

use crate::dto::{
    annual_total_row::*, dashboard_filter::*, product_name_row::*, product_total_row::*,
    product_trend_row::*, sale_amount_row::*,
};

use crate::env_configuration::env_config::*;

use crate::model::configs::{http_server_config::*, total_config::*};

use crate::traits::repository_traits::warehouse_repository::*;
use crate::traits::service_traits::{chart_service::*, query_service::*};

use crate::utils_modules::{html_utils::*, io_utils::*, time_utils::*};

#[derive(Debug, new)]
pub struct MainController<Q: QueryService, C: ChartService> {
    query_service: Q,
    chart_service: C,
    histogram_bin_count: usize,
}

impl<Q, C> MainController<Q, C>
where
    Q: QueryService + 'static,
    C: ChartService + 'static,
{
    #[doc = r#"
        대시보드 HTTP 서버를 기동하는 핵심 함수.

        1. 설정 파일의 HTTP 바인딩 정보로 리스너를 연다
        2. `GET /` 을 대시보드 핸들러에 연결
        3. 매 요청마다 핸들러가 필터 파싱 → 쿼리 → 차트 → 페이지 조립을 새로 수행한다
           (요청 간 공유 상태 없음)

        # Returns
        * `anyhow::Result<()>` - 바인딩 실패 또는 서버 오류 시 Err
    "#]
    pub async fn run_server(self) -> anyhow::Result<()> {
        let server_config: &HttpServerConfig = get_http_server_config_info();
        let bind_addr: String = format!("{}:{}", server_config.host(), server_config.port());

        let shared_controller: Arc<Self> = Arc::new(self);

        let app: Router = Router::new()
            .route("/", get(Self::dashboard_handler))
            .with_state(shared_controller);

        let listener: TcpListener = TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("[MainController->run_server] Failed to bind {}", bind_addr))?;

        info!("Dashboard listening on http://{}", bind_addr);

        axum::serve(listener, app)
            .await
            .context("[MainController->run_server] Server error")?;

        Ok(())
    }

    #[doc = "요청 한 건을 처리하는 핸들러. 필터는 쿼리 스트링에서 매번 새로 파싱한다"]
    async fn dashboard_handler(
        State(controller): State<Arc<Self>>,
        RawQuery(raw_query): RawQuery,
    ) -> Html<String> {
        let filter: DashboardFilter =
            DashboardFilter::from_query_str(raw_query.as_deref().unwrap_or(""));

        info!(
            "dashboard request: {}",
            serde_json::to_string(&filter).unwrap_or_default()
        );

        Html(controller.build_dashboard_page(&filter).await)
    }

    #[doc = r#"
        대시보드 페이지 전체를 조립하는 함수.

        1. HTML 템플릿을 읽는다 (실패 시 안내 페이지 반환)
        2. 제품 멀티셀렉트 옵션을 조회/렌더링
        3. 네 개의 차트 패널을 각각 독립적으로 렌더링
           (한 패널의 실패가 다른 패널을 막지 않는다)
        4. 템플릿 플레이스홀더를 치환하여 완성된 페이지 반환
    "#]
    pub async fn build_dashboard_page(&self, filter: &DashboardFilter) -> String {
        let template: String = match read_html_template(&DASHBOARD_TEMPLATE_PATH) {
            Ok(template) => template,
            Err(e) => {
                error!("[MainController->build_dashboard_page] {:?}", e);
                return String::from(
                    "<html><body><p>Dashboard template unavailable.</p></body></html>",
                );
            }
        };

        let product_options: String = self.render_product_options(filter).await;

        let trend_panel: String = self.render_trend_panel(filter).await;
        let total_panel: String = self.render_total_panel(filter).await;
        let annual_panel: String = self.render_annual_panel(filter).await;
        let distribution_panel: String = self.render_distribution_panel(filter).await;

        Self::fill_template(
            &template,
            &product_options,
            filter,
            &trend_panel,
            &total_panel,
            &annual_panel,
            &distribution_panel,
        )
    }

    #[doc = "제품 멀티셀렉트의 option 목록을 렌더링하는 함수. 현재 선택을 유지한다"]
    async fn render_product_options(&self, filter: &DashboardFilter) -> String {
        let product_rows: Vec<ProductNameRow> = match self.query_service.get_product_names().await {
            Ok(rows) => rows,
            Err(e) => {
                error!("[MainController->render_product_options] {:?}", e);
                return String::new();
            }
        };

        product_rows
            .iter()
            .map(|row| {
                let escaped: String = escape_html(row.product_name());
                let selected: &str = if filter.contains_product(row.product_name()) {
                    " selected"
                } else {
                    ""
                };
                format!("<option value=\"{0}\"{1}>{0}</option>", escaped, selected)
            })
            .collect()
    }

    #[doc = "월/제품별 매출 추이 패널 (멀티 라인 차트)"]
    async fn render_trend_panel(&self, filter: &DashboardFilter) -> String {
        let rows: Vec<ProductTrendRow> = match self.query_service.get_product_trend(filter).await {
            Ok(rows) => rows,
            Err(e) => return Self::render_error_panel("trend", &e),
        };

        let (x_labels, series) = Self::pivot_trend_rows(&rows);

        match self
            .chart_service
            .render_multi_line_chart(
                "Monthly Sales by Product",
                x_labels,
                series,
                "Month",
                "Sales Amount",
            )
            .await
        {
            Ok(svg) => svg,
            Err(e) => Self::render_error_panel("trend", &e),
        }
    }

    #[doc = "제품별 매출 총합 패널 (막대 차트, 총합 내림차순)"]
    async fn render_total_panel(&self, filter: &DashboardFilter) -> String {
        let rows: Vec<ProductTotalRow> = match self.query_service.get_product_totals(filter).await
        {
            Ok(rows) => rows,
            Err(e) => return Self::render_error_panel("total", &e),
        };

        let x_labels: Vec<String> = rows.iter().map(|r| r.product_name().clone()).collect();
        let y_data: Vec<f64> = rows.iter().map(|r| *r.total_amount()).collect();

        match self
            .chart_service
            .render_bar_chart(
                "Total Sales by Product",
                x_labels,
                y_data,
                "Product",
                "Sales Amount",
            )
            .await
        {
            Ok(svg) => svg,
            Err(e) => Self::render_error_panel("total", &e),
        }
    }

    #[doc = "연도별 매출 추이 패널 (라인 차트)"]
    async fn render_annual_panel(&self, filter: &DashboardFilter) -> String {
        let rows: Vec<AnnualTotalRow> = match self.query_service.get_annual_totals(filter).await {
            Ok(rows) => rows,
            Err(e) => return Self::render_error_panel("annual", &e),
        };

        let x_labels: Vec<String> = rows.iter().map(|r| r.sale_year().to_string()).collect();
        let y_data: Vec<f64> = rows.iter().map(|r| *r.total_amount()).collect();

        match self
            .chart_service
            .render_line_chart("Annual Sales Trend", x_labels, y_data, "Year", "Sales Amount")
            .await
        {
            Ok(svg) => svg,
            Err(e) => Self::render_error_panel("annual", &e),
        }
    }

    #[doc = "매출 금액 분포 패널 (히스토그램)"]
    async fn render_distribution_panel(&self, filter: &DashboardFilter) -> String {
        let rows: Vec<SaleAmountRow> = match self.query_service.get_sale_amounts(filter).await {
            Ok(rows) => rows,
            Err(e) => return Self::render_error_panel("distribution", &e),
        };

        let values: Vec<f64> = rows.iter().map(|r| *r.sale_amount()).collect();

        match self
            .chart_service
            .render_histogram_chart(
                "Sales Amount Distribution",
                values,
                self.histogram_bin_count,
                "Sales Amount",
                "Count",
            )
            .await
        {
            Ok(svg) => svg,
            Err(e) => Self::render_error_panel("distribution", &e),
        }
    }

    #[doc = r#"
        실패한 패널 자리에 노출할 메시지를 렌더링하는 함수.

        에러 종류(`WarehouseError::Connection` / `WarehouseError::Query`)에 따라
        문구를 구분하며, 실패한 패널에는 어떤 차트 조각도 출력하지 않는다.
    "#]
    fn render_error_panel(panel_name: &str, e: &anyhow::Error) -> String {
        error!(
            "[MainController->render_error_panel] '{}' panel failed: {:?}",
            panel_name, e
        );

        let message: &str = match e.downcast_ref::<WarehouseError>() {
            Some(WarehouseError::Connection(_)) => {
                "Database connection failed. This chart cannot be rendered."
            }
            Some(WarehouseError::Query(_)) => {
                "The sales query was rejected by the database. This chart cannot be rendered."
            }
            None => "An unexpected error occurred while rendering this chart.",
        };

        format!("<div class=\"panel-error\">{}</div>", message)
    }

    #[doc = r#"
        추이 행들을 차트 입력으로 피벗하는 함수.

        1. 기간(YYYY-MM)을 정렬된 X축 라벨로 수집
        2. 제품별 시리즈를 만들고, 해당 기간에 매출이 없는 칸은 0.0 으로 채운다
        3. 시리즈는 제품명 오름차순으로 정렬되어 렌더링 순서가 결정적이다
    "#]
    fn pivot_trend_rows(rows: &[ProductTrendRow]) -> (Vec<String>, Vec<(String, Vec<f64>)>) {
        let periods: BTreeSet<String> = rows.iter().map(|r| r.period().clone()).collect();
        let x_labels: Vec<String> = periods.into_iter().collect();

        let period_index: BTreeMap<&str, usize> = x_labels
            .iter()
            .enumerate()
            .map(|(i, period)| (period.as_str(), i))
            .collect();

        let mut series_map: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for row in rows {
            let values: &mut Vec<f64> = series_map
                .entry(row.product_name().clone())
                .or_insert_with(|| vec![0.0; x_labels.len()]);

            if let Some(&index) = period_index.get(row.period().as_str()) {
                values[index] += *row.total_amount();
            }
        }

        let series: Vec<(String, Vec<f64>)> = series_map.into_iter().collect();

        (x_labels, series)
    }

    #[doc = "템플릿 플레이스홀더를 치환하여 최종 페이지를 만드는 함수"]
    fn fill_template(
        template: &str,
        product_options: &str,
        filter: &DashboardFilter,
        trend_panel: &str,
        total_panel: &str,
        annual_panel: &str,
        distribution_panel: &str,
    ) -> String {
        let start_date: String = filter
            .start_date()
            .as_ref()
            .map(|d| format_date_sql(*d))
            .unwrap_or_default();
        let end_date: String = filter
            .end_date()
            .as_ref()
            .map(|d| format_date_sql(*d))
            .unwrap_or_default();

        template
            .replace("{product_options}", product_options)
            .replace("{start_date}", &start_date)
            .replace("{end_date}", &end_date)
            .replace("{trend_panel}", trend_panel)
            .replace("{total_panel}", total_panel)
            .replace("{annual_panel}", annual_panel)
            .replace("{distribution_panel}", distribution_panel)
    }
}
