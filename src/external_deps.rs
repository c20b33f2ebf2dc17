pub use chrono::{DateTime, Datelike, NaiveDate, Utc};
pub use deadpool_tiberius::{
    Manager, Pool,
    tiberius::{Row, error::Error as TiberiusError},
};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use thiserror::Error;
pub use urlencoding::decode as url_decode;
