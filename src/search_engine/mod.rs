#[allow(clippy::module_inception)]
pub mod search_engine;
