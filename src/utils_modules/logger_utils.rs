use crate::common::*;

static LOGGER_HANDLE: once_lazy<LoggerHandle> = once_lazy::new(build_logger);

#[doc = r#"
    전역 로거를 구성하는 함수.

    1. `RUST_LOG` 환경변수 (기본 `info`) 로 로그 레벨 결정
    2. `logs/` 디렉토리에 일 단위 로테이션 파일 로그 기록, 30개 파일 유지
    3. 동일한 내용을 stdout 으로 복제 출력

    # Panics
    로거 초기화 실패 시 애플리케이션 종료 (로깅 없이 동작하지 않는다)
"#]
fn build_logger() -> LoggerHandle {
    Logger::try_with_env_or_str("info")
        .unwrap_or_else(|e| panic!("[logger_utils->build_logger] Invalid log spec: {:?}", e))
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format(log_format)
        .start()
        .unwrap_or_else(|e| panic!("[logger_utils->build_logger] Failed to start logger: {:?}", e))
}

#[doc = "로그 레코드 포맷: [timestamp] [LEVEL] message"]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

#[doc = "전역 로거 설정. 최초 1회만 초기화되며 핸들은 프로세스 종료까지 유지된다"]
pub fn set_global_logger() {
    once_lazy::force(&LOGGER_HANDLE);
}
