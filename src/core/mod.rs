pub mod config;
pub mod distance_metric;
pub mod search_state;
