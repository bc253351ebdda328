pub mod error;
pub mod puzzle;
