use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}
