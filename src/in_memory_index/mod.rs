#[allow(clippy::module_inception)]
pub mod in_memory_index;
