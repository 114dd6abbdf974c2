//! Simple variable substitution renderer.

use spindle_core::{application::ports::TemplateRenderer, domain::GeneratorConfig};

/// Renderer using basic `{{key}}` substitution against the configuration.
///
/// Every configuration entry becomes a replaceable placeholder: flags render
/// as `true`/`false`, text values verbatim. Placeholders that name no
/// configuration key are left in place unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    fn render(&self, template: &str, config: &GeneratorConfig) -> String {
        let mut result = template.to_string();

        // Single-pass replacement; entries are independent of one another.
        for (key, value) in config.iter() {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, &value.substitution());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_core::domain::ConfigValue;
    use std::collections::BTreeMap;

    fn config() -> GeneratorConfig {
        let mut entries = BTreeMap::new();
        entries.insert("projectName".to_string(), ConfigValue::Text("demo".into()));
        entries.insert("projectDesc".to_string(), ConfigValue::Text(String::new()));
        entries.insert("nwjs".to_string(), ConfigValue::Flag(false));
        entries.insert("react".to_string(), ConfigValue::Flag(true));
        GeneratorConfig::from_entries(entries)
    }

    #[test]
    fn substitutes_text_and_flag_values() {
        let out = SimpleRenderer::new().render(
            "# {{projectName}}\nnwjs: {{nwjs}}, react: {{react}}",
            &config(),
        );
        assert_eq!(out, "# demo\nnwjs: false, react: true");
    }

    #[test]
    fn unknown_placeholders_are_left_as_is() {
        let out = SimpleRenderer::new().render("{{projectName}} {{unknownKey}}", &config());
        assert_eq!(out, "demo {{unknownKey}}");
    }

    #[test]
    fn empty_text_renders_as_empty() {
        let out = SimpleRenderer::new().render("desc:[{{projectDesc}}]", &config());
        assert_eq!(out, "desc:[]");
    }

    #[test]
    fn repeated_placeholders_all_resolve() {
        let out = SimpleRenderer::new().render("{{projectName}}-{{projectName}}", &config());
        assert_eq!(out, "demo-demo");
    }
}
