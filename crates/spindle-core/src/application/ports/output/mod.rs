//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `spindle-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::GeneratorConfig;
use crate::error::SpindleResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `spindle_adapters::filesystem::LocalFilesystem` (production)
/// - `spindle_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The composer reads template files and writes destination files through
/// this port only; it never touches `std::fs` itself.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SpindleResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SpindleResult<()>;

    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> SpindleResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// List every file under `root`, recursively, as paths relative to
    /// `root`, in a stable (sorted) order.
    fn walk_files(&self, root: &Path) -> SpindleResult<Vec<PathBuf>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `spindle_adapters::renderer::SimpleRenderer` (variable substitution)
///
/// Rendering is infallible by contract: placeholders that resolve against
/// the configuration are substituted, everything else passes through
/// unchanged.
pub trait TemplateRenderer: Send + Sync {
    /// Substitute `{{key}}` placeholders in `template` from `config`.
    fn render(&self, template: &str, config: &GeneratorConfig) -> String;
}
