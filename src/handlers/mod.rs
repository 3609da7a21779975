pub mod catalog;
pub mod identifier;
pub mod quiz;
