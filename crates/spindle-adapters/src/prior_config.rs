//! Persisted configuration store (`config.json` in the destination root).
//!
//! Loading is best-effort by contract: a missing file, an unreadable file,
//! or malformed JSON all degrade to an empty configuration with a
//! debug-level log. The user never sees a load failure.

use std::path::{Path, PathBuf};

use tracing::debug;

use spindle_core::{
    application::ApplicationError,
    domain::{GeneratorConfig, PriorConfig},
    error::{SpindleError, SpindleResult},
};

/// File name of the persisted configuration, relative to the destination
/// root.
pub const CONFIG_FILE: &str = "config.json";

/// Reads and writes the persisted configuration of a destination directory.
#[derive(Debug, Clone)]
pub struct PriorConfigStore {
    path: PathBuf,
}

impl PriorConfigStore {
    /// Store for the configuration under `dest_root`.
    pub fn new(dest_root: impl AsRef<Path>) -> Self {
        Self {
            path: dest_root.as_ref().join(CONFIG_FILE),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the previous run's configuration, or an empty mapping if there
    /// is none or it cannot be parsed.
    pub fn load(&self) -> PriorConfig {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no prior configuration");
                return PriorConfig::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(prior) => prior,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "prior configuration unparseable");
                PriorConfig::new()
            }
        }
    }

    /// Persist the final configuration for the next run.
    pub fn save(&self, config: &GeneratorConfig) -> SpindleResult<()> {
        let json = serde_json::to_string_pretty(config).map_err(|e| SpindleError::Internal {
            message: format!("failed to serialize configuration: {e}"),
        })?;
        std::fs::write(&self.path, json).map_err(|e| {
            ApplicationError::FilesystemError {
                path: self.path.clone(),
                reason: format!("Failed to write configuration: {e}"),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_core::domain::{Answers, ConfigValue, Framework};

    #[test]
    fn missing_file_yields_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = PriorConfigStore::new(dir.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_json_yields_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();

        let store = PriorConfigStore::new(dir.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = PriorConfigStore::new(dir.path());

        let config = GeneratorConfig::from_parts(
            PriorConfig::new(),
            &Answers {
                framework: Framework::Angular,
                nwjs: true,
                project_name: "demo".into(),
                project_desc: "a demo".into(),
                src: true,
                gulp: false,
                deploy_gh: false,
            },
        );
        store.save(&config).unwrap();

        let prior = store.load();
        assert_eq!(prior.get("generate"), Some(&ConfigValue::Text("angular".into())));
        assert_eq!(prior.get("angular"), Some(&ConfigValue::Flag(true)));
        assert_eq!(prior.get("gulp"), Some(&ConfigValue::Flag(false)));
        assert_eq!(prior.get("projectName"), Some(&ConfigValue::Text("demo".into())));
    }
}
