use crate::common::*;

#[doc = r#"
    웨어하우스 접근 실패를 두 종류로 구분하는 에러 타입.

    * `Connection` - 네트워크/인증 핸드셰이크 실패, 커넥션 풀 체크아웃 실패
    * `Query` - 원격 엔진이 쿼리를 거부한 경우 (잘못된 SQL, 없는 테이블 등)

    패널 별 에러 메시지 분기가 이 구분에 의존하므로 종류가 계약의 일부다.
"#]
#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("warehouse connection failed: {0}")]
    Connection(String),
    #[error("warehouse query rejected: {0}")]
    Query(String),
}

impl From<TiberiusError> for WarehouseError {
    fn from(e: TiberiusError) -> Self {
        match &e {
            /* 전송 계층 실패는 연결 오류로 분류 */
            TiberiusError::Io { .. } | TiberiusError::Tls(_) | TiberiusError::Routing { .. } => {
                WarehouseError::Connection(e.to_string())
            }
            _ => WarehouseError::Query(e.to_string()),
        }
    }
}

#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    #[doc = r#"
        단일 읽기 쿼리를 실행하고 첫 번째 결과 집합의 행들을 반환하는 함수.

        재시도 없이 1회만 시도한다. 실패 시 호출자가 사용자에게 노출할 수 있도록
        `WarehouseError` 로 종류를 구분하여 반환한다.

        # Arguments
        * `query` - 실행할 SQL 텍스트

        # Returns
        * `Vec<Row>` - 조회된 행 목록 (컬럼명 → 값 매핑)
        * `WarehouseError` - 연결 실패 또는 쿼리 거부
    "#]
    async fn execute_query(&self, query: &str) -> Result<Vec<Row>, WarehouseError>;
}
