//! AI components

pub mod behavior;
pub mod config;

#[cfg(test)]
mod config_tests;

// Re-export all components
pub use behavior::*;
pub use config::*;
