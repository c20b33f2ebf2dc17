use crate::common::*;

use crate::model::configs::warehouse_config::*;

use crate::traits::repository_traits::warehouse_repository::*;

#[derive(Clone)]
pub struct WarehouseRepositoryImpl {
    pool: Pool,
}

impl WarehouseRepositoryImpl {
    #[doc = r#"
        웨어하우스 커넥션 풀을 생성하는 함수.

        풀 생성 자체는 네트워크 접속을 수행하지 않으며, 실제 로그인은
        첫 쿼리 실행 시 커넥션 체크아웃 단계에서 이루어진다.

        # Arguments
        * `warehouse_config` - 접속 호스트/포트/계정/데이터베이스 정보

        # Returns
        * `Result<Self, anyhow::Error>` - 풀 구성 실패 시 오류
    "#]
    pub fn new(warehouse_config: &WarehouseConfig) -> Result<Self, anyhow::Error> {
        let pool: Pool = Manager::new()
            .host(warehouse_config.host())
            .port(*warehouse_config.port())
            .basic_authentication(warehouse_config.user(), warehouse_config.password())
            .database(warehouse_config.database())
            .trust_cert()
            .max_size(4)
            .create_pool()
            .context("[WarehouseRepositoryImpl->new] Failed to build the warehouse pool")?;

        Ok(WarehouseRepositoryImpl { pool })
    }
}

#[async_trait]
impl WarehouseRepository for WarehouseRepositoryImpl {
    #[doc = "Function that EXECUTES a read-only query against the warehouse - single attempt"]
    async fn execute_query(&self, query: &str) -> Result<Vec<Row>, WarehouseError> {
        let mut client = self.pool.get().await.map_err(|e| {
            WarehouseError::Connection(format!(
                "failed to check out a warehouse session: {:?}",
                e
            ))
        })?;

        let query_stream = client
            .simple_query(query)
            .await
            .map_err(WarehouseError::from)?;

        let rows: Vec<Row> = query_stream
            .into_first_result()
            .await
            .map_err(WarehouseError::from)?;

        Ok(rows)
    }
}
