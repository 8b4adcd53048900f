pub mod dynamic;
pub mod error;

// Re-export all modules
pub use dynamic::*;
