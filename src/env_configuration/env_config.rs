use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    1. 환경변수 `key`에 해당하는 값을 `env::var()`로 조회
    2. 값이 존재하면 해당 값을 문자열로 반환
    3. 값이 없으면 에러 로깅 후 panic 으로 즉시 종료

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Returns
    * `String` - 환경변수 값

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    서버 설정 정보 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `SERVER_CONFIG_PATH` 환경변수를 통해 TOML 형식의 서버 설정 파일 경로를 지정받는다.
    이 파일에는 웨어하우스 연결 정보, HTTP 서버 바인딩 정보, 대시보드 설정 등
    애플리케이션 실행에 필요한 모든 설정 정보가 포함되어 있다.

    # Panics
    `SERVER_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = r#"
    대시보드 페이지용 HTML 템플릿 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `DASHBOARD_TEMPLATE_PATH` 환경변수를 통해 HTML 템플릿 파일 경로를 지정받는다.
    이 템플릿은 대시보드 페이지의 레이아웃을 정의하며, 플레이스홀더를 통해
    필터 컨트롤과 차트 패널이 동적으로 삽입된다.

    # 예상 템플릿 플레이스홀더
    - `{product_options}`: 제품 멀티셀렉트 옵션들
    - `{start_date}` / `{end_date}`: 날짜 입력 초기값
    - `{trend_panel}` / `{total_panel}` / `{annual_panel}` / `{distribution_panel}`: 차트 패널

    # Panics
    `DASHBOARD_TEMPLATE_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static DASHBOARD_TEMPLATE_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("DASHBOARD_TEMPLATE_PATH"));
