pub mod grid;
pub mod layout;
pub mod matcher;
pub mod selection;
