//! Infrastructure adapters for Spindle.
//!
//! This crate implements the ports defined in
//! `spindle_core::application::ports`. It contains all external dependencies
//! and I/O operations.

pub mod filesystem;
pub mod prior_config;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prior_config::PriorConfigStore;
pub use renderer::SimpleRenderer;
