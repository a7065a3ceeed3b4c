#[allow(clippy::module_inception)]
pub mod query_processor;
pub mod utils;
