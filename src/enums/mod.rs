pub mod sort_order;
pub mod time_bucket;
