//! Command implementations for the howdy CLI

pub mod seed;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use seed::run_seed;
pub use serve::run_serve;
