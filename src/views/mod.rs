pub mod catalog;
pub mod identifier;
pub mod layout;
pub mod quiz;

// Re-export commonly used functions from layout
pub use layout::page;
