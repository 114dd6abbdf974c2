//! The configuration mapping that drives composition.
//!
//! [`GeneratorConfig`] is the single value flowing from the answer collector
//! into the template composer. It is built exactly once by
//! [`GeneratorConfig::from_parts`] and never mutated afterwards; every
//! conditional step in the composition plan reads flags from it, and the
//! renderer uses it as the substitution context for `{{key}}` placeholders.
//!
//! # Fold order
//!
//! 1. entries from the previous run's persisted configuration (may be empty);
//! 2. one `false` flag per entry of [`Framework::ALL`], so unselected
//!    framework flags are explicitly present and falsy rather than absent;
//! 3. the collected answers, each overwriting any same-key entry;
//! 4. the chosen framework's flag set to `true`.
//!
//! Persisted entries outside the framework enumeration survive the fold
//! untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Framework;
use crate::domain::question::Answers;

/// Well-known configuration keys. Spelled exactly as they appear in
/// config.json and in template placeholders (`{{projectName}}`).
pub mod keys {
    pub const GENERATE: &str = "generate";
    pub const NWJS: &str = "nwjs";
    pub const PROJECT_NAME: &str = "projectName";
    pub const PROJECT_DESC: &str = "projectDesc";
    pub const SRC: &str = "src";
    pub const GULP: &str = "gulp";
    pub const DEPLOY_GH: &str = "deployGh";
}

/// A single configuration value: answers are booleans or strings, nothing
/// else. Untagged so config.json stays plain JSON (`true`, `"demo"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Flag(bool),
    Text(String),
}

impl ConfigValue {
    /// String form used for placeholder substitution: flags render as
    /// `true`/`false`, text renders verbatim.
    pub fn substitution(&self) -> String {
        match self {
            Self::Flag(b) => b.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Entries loaded from a previous run's config.json (possibly empty).
pub type PriorConfig = BTreeMap<String, ConfigValue>;

/// The immutable configuration mapping consumed by the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratorConfig {
    entries: BTreeMap<String, ConfigValue>,
}

impl GeneratorConfig {
    /// Build the configuration from a prior run's entries and the answers
    /// collected this run. See the module docs for the fold order.
    pub fn from_parts(prior: PriorConfig, answers: &Answers) -> Self {
        let mut entries = prior;

        for fw in Framework::ALL {
            entries.insert(fw.flag_key().to_string(), ConfigValue::Flag(false));
        }

        entries.insert(
            keys::GENERATE.to_string(),
            ConfigValue::Text(answers.framework.as_str().to_string()),
        );
        entries.insert(keys::NWJS.to_string(), ConfigValue::Flag(answers.nwjs));
        entries.insert(
            keys::PROJECT_NAME.to_string(),
            ConfigValue::Text(answers.project_name.clone()),
        );
        entries.insert(
            keys::PROJECT_DESC.to_string(),
            ConfigValue::Text(answers.project_desc.clone()),
        );
        entries.insert(keys::SRC.to_string(), ConfigValue::Flag(answers.src));
        entries.insert(keys::GULP.to_string(), ConfigValue::Flag(answers.gulp));
        entries.insert(
            keys::DEPLOY_GH.to_string(),
            ConfigValue::Flag(answers.deploy_gh),
        );

        entries.insert(
            answers.framework.flag_key().to_string(),
            ConfigValue::Flag(true),
        );

        Self { entries }
    }

    /// Wrap an arbitrary mapping. Used by tests and by callers that already
    /// hold a complete configuration (for instance a replayed one).
    pub fn from_entries(entries: BTreeMap<String, ConfigValue>) -> Self {
        Self { entries }
    }

    /// Read a boolean flag. Missing keys and text values are falsy.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(ConfigValue::Flag(true)))
    }

    /// Read a text value, if the key holds one.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(ConfigValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Iterate all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The framework recorded under `generate`, when present and valid.
    pub fn framework(&self) -> Option<Framework> {
        self.text(keys::GENERATE)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(framework: Framework) -> Answers {
        Answers {
            framework,
            nwjs: false,
            project_name: "demo".into(),
            project_desc: String::new(),
            src: true,
            gulp: true,
            deploy_gh: false,
        }
    }

    #[test]
    fn exactly_one_framework_flag_is_true() {
        for chosen in Framework::ALL {
            let config = GeneratorConfig::from_parts(PriorConfig::new(), &answers(chosen));
            for fw in Framework::ALL {
                assert_eq!(
                    config.flag(fw.flag_key()),
                    fw == chosen,
                    "flag {} after choosing {}",
                    fw.flag_key(),
                    chosen
                );
            }
            assert_eq!(config.framework(), Some(chosen));
        }
    }

    #[test]
    fn stale_framework_flag_from_prior_run_is_cleared() {
        let mut prior = PriorConfig::new();
        prior.insert("angular".into(), ConfigValue::Flag(true));

        let config = GeneratorConfig::from_parts(prior, &answers(Framework::React));
        assert!(!config.flag("angular"));
        assert!(config.flag("react"));
    }

    #[test]
    fn unknown_prior_entries_survive_the_fold() {
        let mut prior = PriorConfig::new();
        prior.insert("legacyFlavor".into(), ConfigValue::Text("vanilla".into()));

        let config = GeneratorConfig::from_parts(prior, &answers(Framework::Angular));
        assert_eq!(config.text("legacyFlavor"), Some("vanilla"));
    }

    #[test]
    fn answers_overwrite_prior_values() {
        let mut prior = PriorConfig::new();
        prior.insert(keys::PROJECT_NAME.into(), ConfigValue::Text("old-name".into()));
        prior.insert(keys::GULP.into(), ConfigValue::Flag(false));

        let config = GeneratorConfig::from_parts(prior, &answers(Framework::React));
        assert_eq!(config.text(keys::PROJECT_NAME), Some("demo"));
        assert!(config.flag(keys::GULP));
    }

    #[test]
    fn text_values_are_not_truthy_flags() {
        let mut entries = BTreeMap::new();
        entries.insert("gulp".into(), ConfigValue::Text("true".into()));
        let config = GeneratorConfig::from_entries(entries);
        assert!(!config.flag("gulp"));
    }

    #[test]
    fn substitution_forms() {
        assert_eq!(ConfigValue::Flag(true).substitution(), "true");
        assert_eq!(ConfigValue::Flag(false).substitution(), "false");
        assert_eq!(ConfigValue::Text("demo".into()).substitution(), "demo");
    }

    #[test]
    fn serializes_as_plain_json() {
        let config = GeneratorConfig::from_parts(PriorConfig::new(), &answers(Framework::React));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["generate"], serde_json::json!("react"));
        assert_eq!(json["react"], serde_json::json!(true));
        assert_eq!(json["angular"], serde_json::json!(false));
    }
}
