pub mod search;
pub mod types;
