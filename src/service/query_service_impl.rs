use crate::common::*;

use crate::traits::{repository_traits::warehouse_repository::*, service_traits::query_service::*};

use crate::utils_modules::{time_utils::*, traits::*};

use crate::dto::{
    annual_total_row::*, dashboard_filter::*, product_name_row::*, product_total_row::*,
    product_trend_row::*, sale_amount_row::*,
};

use crate::enums::{sort_order::*, time_bucket::*};

#[derive(new)]
pub struct QueryServiceImpl<R: WarehouseRepository> {
    warehouse_conn: Arc<R>,
    sales_table: String,
}

impl<R: WarehouseRepository> QueryServiceImpl<R> {
    #[doc = r#"
        웨어하우스 행 목록을 도메인 DTO 벡터로 변환하는 제네릭 함수.

        1. 각 행을 `FromSqlRow` 트레이트를 통해 타입 `T` 로 변환
        2. 하나라도 변환에 실패하면 전체를 오류로 반환

        # Type Parameters
        * `T` - 최종 반환할 DTO 타입 (`FromSqlRow` 트레이트 구현 필요)

        # Arguments
        * `rows` - 웨어하우스에서 조회된 행 목록

        # Returns
        * `Vec<T>` - 변환된 DTO 벡터
        * `anyhow::Error` - 필수 컬럼 누락, 타입 변환 실패 시
    "#]
    fn rows_to_vec<T: FromSqlRow>(&self, rows: &[Row]) -> anyhow::Result<Vec<T>> {
        rows.iter().map(T::from_sql_row).collect()
    }

    #[doc = "문자열 값을 SQL 문자열 리터럴로 인용하는 함수. 작은따옴표는 두 개로 치환"]
    fn quote_str_literal(value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    #[doc = r#"
        필터 상태를 WHERE 절로 변환하는 함수.

        1. `products` 가 `Some` 이고 비어있지 않으면 `product_name IN (...)` 조건 생성
           (`None` 은 제품 조건 없음; 빈 선택은 호출자가 쿼리 자체를 생략한다)
        2. `start_date` / `end_date` 는 포함 경계의 날짜 조건으로 변환

        # Returns
        * `String` - 조건이 없으면 빈 문자열, 있으면 `WHERE ...`
    "#]
    fn build_where_clause(&self, filter: &DashboardFilter) -> String {
        let mut conditions: Vec<String> = Vec::new();

        if let Some(selected) = filter.products() {
            if !selected.is_empty() {
                let quoted: Vec<String> = selected
                    .iter()
                    .map(|product| Self::quote_str_literal(product))
                    .collect();
                conditions.push(format!("product_name IN ({})", quoted.join(", ")));
            }
        }

        if let Some(start_date) = filter.start_date() {
            conditions.push(format!("sale_date >= '{}'", format_date_sql(*start_date)));
        }

        if let Some(end_date) = filter.end_date() {
            conditions.push(format!("sale_date <= '{}'", format_date_sql(*end_date)));
        }

        if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        }
    }

    #[doc = "월/제품별 매출 추이 쿼리. 기간 오름차순, 제품명 오름차순 정렬"]
    fn build_product_trend_query(&self, filter: &DashboardFilter) -> String {
        let period_expr: String = TimeBucket::Month.select_expr("sale_date");
        let order_by: String = SortSpec::to_order_by_clause(&[
            SortSpec { field: "period", order: SortOrder::Asc },
            SortSpec { field: "product_name", order: SortOrder::Asc },
        ]);

        format!(
            "SELECT product_name, {period_expr} AS period, \
             CAST(SUM(sale_amount) AS FLOAT) AS total_amount \
             FROM {table} {where_clause} \
             GROUP BY product_name, {period_expr} {order_by}",
            period_expr = period_expr,
            table = self.sales_table,
            where_clause = self.build_where_clause(filter),
            order_by = order_by,
        )
    }

    #[doc = "제품별 매출 총합 쿼리. 총합 내림차순, 동률은 제품명 오름차순으로 고정"]
    fn build_product_totals_query(&self, filter: &DashboardFilter) -> String {
        let order_by: String = SortSpec::to_order_by_clause(&[
            SortSpec { field: "total_amount", order: SortOrder::Desc },
            SortSpec { field: "product_name", order: SortOrder::Asc },
        ]);

        format!(
            "SELECT product_name, CAST(SUM(sale_amount) AS FLOAT) AS total_amount \
             FROM {table} {where_clause} \
             GROUP BY product_name {order_by}",
            table = self.sales_table,
            where_clause = self.build_where_clause(filter),
            order_by = order_by,
        )
    }

    #[doc = "연도별 매출 총합 쿼리. 연도 오름차순 정렬, 연도당 정확히 한 행"]
    fn build_annual_totals_query(&self, filter: &DashboardFilter) -> String {
        let year_expr: String = TimeBucket::Year.select_expr("sale_date");
        let order_by: String = SortSpec::to_order_by_clause(&[SortSpec {
            field: "sale_year",
            order: SortOrder::Asc,
        }]);

        format!(
            "SELECT {year_expr} AS sale_year, \
             CAST(SUM(sale_amount) AS FLOAT) AS total_amount \
             FROM {table} {where_clause} \
             GROUP BY {year_expr} {order_by}",
            year_expr = year_expr,
            table = self.sales_table,
            where_clause = self.build_where_clause(filter),
            order_by = order_by,
        )
    }

    #[doc = "히스토그램 구간화를 위한 비집계 매출 금액 쿼리"]
    fn build_sale_amounts_query(&self, filter: &DashboardFilter) -> String {
        format!(
            "SELECT CAST(sale_amount AS FLOAT) AS sale_amount \
             FROM {table} {where_clause}",
            table = self.sales_table,
            where_clause = self.build_where_clause(filter),
        )
    }

    #[doc = "제품 멀티셀렉트 컨트롤용 제품명 목록 쿼리"]
    fn build_product_names_query(&self) -> String {
        format!(
            "SELECT DISTINCT product_name FROM {table} ORDER BY product_name ASC",
            table = self.sales_table,
        )
    }
}

#[async_trait]
impl<R: WarehouseRepository> QueryService for QueryServiceImpl<R> {
    async fn get_product_names(&self) -> anyhow::Result<Vec<ProductNameRow>> {
        let query: String = self.build_product_names_query();
        let rows: Vec<Row> = self.warehouse_conn.execute_query(&query).await?;

        self.rows_to_vec::<ProductNameRow>(&rows)
    }

    #[doc = "빈 제품 선택은 쿼리를 생략하고 빈 결과를 반환한다 (빈 차트 렌더링용)"]
    async fn get_product_trend(
        &self,
        filter: &DashboardFilter,
    ) -> anyhow::Result<Vec<ProductTrendRow>> {
        if filter.is_empty_selection() {
            return Ok(Vec::new());
        }

        let query: String = self.build_product_trend_query(filter);
        let rows: Vec<Row> = self.warehouse_conn.execute_query(&query).await?;

        self.rows_to_vec::<ProductTrendRow>(&rows)
    }

    async fn get_product_totals(
        &self,
        filter: &DashboardFilter,
    ) -> anyhow::Result<Vec<ProductTotalRow>> {
        if filter.is_empty_selection() {
            return Ok(Vec::new());
        }

        let query: String = self.build_product_totals_query(filter);
        let rows: Vec<Row> = self.warehouse_conn.execute_query(&query).await?;

        self.rows_to_vec::<ProductTotalRow>(&rows)
    }

    async fn get_annual_totals(
        &self,
        filter: &DashboardFilter,
    ) -> anyhow::Result<Vec<AnnualTotalRow>> {
        if filter.is_empty_selection() {
            return Ok(Vec::new());
        }

        let query: String = self.build_annual_totals_query(filter);
        let rows: Vec<Row> = self.warehouse_conn.execute_query(&query).await?;

        self.rows_to_vec::<AnnualTotalRow>(&rows)
    }

    async fn get_sale_amounts(
        &self,
        filter: &DashboardFilter,
    ) -> anyhow::Result<Vec<SaleAmountRow>> {
        if filter.is_empty_selection() {
            return Ok(Vec::new());
        }

        let query: String = self.build_sale_amounts_query(filter);
        let rows: Vec<Row> = self.warehouse_conn.execute_query(&query).await?;

        self.rows_to_vec::<SaleAmountRow>(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /* 쿼리가 실행되면 안 되는 경로 검증용 스텁. 호출 자체가 오류를 반환한다 */
    struct RejectingRepo;

    #[async_trait]
    impl WarehouseRepository for RejectingRepo {
        async fn execute_query(&self, _query: &str) -> Result<Vec<Row>, WarehouseError> {
            Err(WarehouseError::Query(String::from(
                "no query should be issued in this scenario",
            )))
        }
    }

    fn service() -> QueryServiceImpl<RejectingRepo> {
        QueryServiceImpl::new(
            Arc::new(RejectingRepo),
            String::from("PHARMA_SALES_DB.SALES_DATA.TABLE_SALES_DAILY"),
        )
    }

    fn filter_with_products(products: &[&str]) -> DashboardFilter {
        DashboardFilter::new(
            Some(products.iter().map(|p| p.to_string()).collect()),
            None,
            None,
        )
    }

    #[test]
    fn trend_query_filters_only_selected_products() {
        let query: String =
            service().build_product_trend_query(&filter_with_products(&["Aspirin", "Ibuprofen"]));

        assert!(query.contains("product_name IN ('Aspirin', 'Ibuprofen')"));
        assert!(query.contains("GROUP BY product_name, CONVERT(VARCHAR(7), sale_date, 120)"));
        assert!(query.contains("ORDER BY period ASC, product_name ASC"));
    }

    #[test]
    fn absent_product_selection_generates_no_product_predicate() {
        let query: String = service().build_product_trend_query(&DashboardFilter::default());

        assert!(!query.contains("product_name IN"));
        assert!(!query.contains("WHERE"));
    }

    #[test]
    fn product_literals_are_escaped() {
        let query: String =
            service().build_product_totals_query(&filter_with_products(&["O'Brien's Tonic"]));

        assert!(query.contains("product_name IN ('O''Brien''s Tonic')"));
    }

    #[test]
    fn totals_query_sorts_desc_with_name_tiebreak() {
        let query: String = service().build_product_totals_query(&DashboardFilter::default());

        assert!(query.contains("ORDER BY total_amount DESC, product_name ASC"));
    }

    #[test]
    fn annual_query_groups_once_per_year() {
        let query: String = service().build_annual_totals_query(&DashboardFilter::default());

        assert!(query.contains("YEAR(sale_date) AS sale_year"));
        assert!(query.contains("GROUP BY YEAR(sale_date)"));
        assert!(query.contains("ORDER BY sale_year ASC"));
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let filter: DashboardFilter = DashboardFilter::new(
            None,
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 12, 31),
        );

        let query: String = service().build_sale_amounts_query(&filter);

        assert!(query.contains("WHERE sale_date >= '2024-01-01' AND sale_date <= '2024-12-31'"));
    }

    #[tokio::test]
    async fn empty_selection_short_circuits_without_querying() {
        let service: QueryServiceImpl<RejectingRepo> = service();
        let empty_filter: DashboardFilter = DashboardFilter::new(Some(Vec::new()), None, None);

        let trend = service.get_product_trend(&empty_filter).await.unwrap();
        let totals = service.get_product_totals(&empty_filter).await.unwrap();
        let annual = service.get_annual_totals(&empty_filter).await.unwrap();
        let amounts = service.get_sale_amounts(&empty_filter).await.unwrap();

        assert!(trend.is_empty());
        assert!(totals.is_empty());
        assert!(annual.is_empty());
        assert!(amounts.is_empty());
    }
}
