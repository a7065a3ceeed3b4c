pub mod posting;
pub mod types;
