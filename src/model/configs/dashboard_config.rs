use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct DashboardConfig {
    pub histogram_bin_count: usize,
    pub chart_width: u32,
    pub chart_height: u32,
}
