//! cleaning module
pub mod basic_cleaning;

/// Re-exports
pub use basic_cleaning::BasicCleaning;
