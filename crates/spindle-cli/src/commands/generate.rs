//! Implementation of the `spindle generate` command.
//!
//! Responsibility: resolve paths, collect answers, fold them into the
//! configuration, call the core compose service, and display results. No
//! composition logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use spindle_adapters::{LocalFilesystem, PriorConfigStore, SimpleRenderer};
use spindle_core::{
    application::ComposeService,
    domain::{Answers, Framework, GeneratorConfig},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompts::{self, DefaultAnswers},
};

/// Execute the `spindle generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the destination root (created if missing)
/// 2. Resolve the template root (flag > config > ./templates)
/// 3. Load the prior persisted configuration (best-effort)
/// 4. Collect answers — interactive prompts or defaults
/// 5. Fold answers into the configuration
/// 6. Run the composition plan
/// 7. Persist the configuration for the next run, print the summary
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Destination root
    let dest_root = args.dest.clone().unwrap_or_else(|| PathBuf::from("."));
    if !dest_root.exists() {
        std::fs::create_dir_all(&dest_root)?;
    }
    let canonical = dest_root.canonicalize()?;
    let project_name_default = default_project_name(&canonical);

    // 2. Template root
    let template_root = resolve_template_root(args.template_dir.clone(), &config);
    if !template_root.is_dir() {
        return Err(CliError::TemplateDirNotFound {
            path: template_root,
        });
    }

    debug!(
        dest = %dest_root.display(),
        templates = %template_root.display(),
        "paths resolved"
    );

    output.header("Spindle — let's spin up a web app.")?;

    // 3. Prior configuration (silently empty when absent or unreadable)
    let store = PriorConfigStore::new(&dest_root);
    let prior = store.load();

    // 4. Answers
    let framework_override: Option<Framework> = args.framework.map(Into::into);
    let answers = if args.defaults {
        let mut source = DefaultAnswers {
            framework: framework_override,
        };
        prompts::collect(&mut source, &project_name_default)?
    } else {
        collect_interactive(
            framework_override,
            !output.supports_color(),
            &project_name_default,
        )?
    };

    debug!(
        framework = %answers.framework,
        nwjs = answers.nwjs,
        src = answers.src,
        gulp = answers.gulp,
        deploy_gh = answers.deploy_gh,
        "answers collected"
    );

    // 5. Fold into the configuration
    let generator_config = GeneratorConfig::from_parts(prior, &answers);

    // 6. Compose
    let service = ComposeService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SimpleRenderer::new()),
    );

    info!(project = %answers.project_name, dest = %dest_root.display(), "generation started");
    let report = service
        .compose(&generator_config, &template_root, &dest_root)
        .map_err(CliError::Core)?;
    info!(
        files = report.files_written,
        steps = report.steps_run.len(),
        "generation completed"
    );

    // 7. Persist for the next run; a failure here must not fail the run.
    if let Err(e) = store.save(&generator_config) {
        warn!(error = %e, "could not persist configuration");
        output.warning("Could not save config.json for the next run")?;
    }

    output.success(&format!(
        "Everything generated just fine! ({} files written)",
        report.files_written
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        if let Some(dest) = &args.dest {
            output.print(&format!("  cd {}", dest.display()))?;
        }
        output.print("  npm install")?;
        if answers.gulp {
            output.print("  gulp serve")?;
        }
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Template root: `--template-dir` wins, then the config file, then
/// `./templates`.
fn resolve_template_root(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.templates.dir.clone())
        .unwrap_or_else(|| PathBuf::from("templates"))
}

/// Project-name default: the last path segment of the (canonical)
/// destination root.
fn default_project_name(canonical: &Path) -> String {
    canonical
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("app")
        .to_string()
}

// ── Answer collection ─────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn collect_interactive(
    framework: Option<Framework>,
    no_color: bool,
    project_name_default: &str,
) -> CliResult<Answers> {
    let mut prompter = crate::prompts::InteractivePrompter::new(no_color, framework);
    prompts::collect(&mut prompter, project_name_default)
}

#[cfg(not(feature = "interactive"))]
fn collect_interactive(
    _framework: Option<Framework>,
    _no_color: bool,
    _project_name_default: &str,
) -> CliResult<Answers> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_config() {
        let cfg = AppConfig {
            templates: crate::config::TemplateConfig {
                dir: Some(PathBuf::from("/from/config")),
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_template_root(Some(PathBuf::from("/from/flag")), &cfg),
            PathBuf::from("/from/flag")
        );
    }

    #[test]
    fn config_wins_over_builtin_default() {
        let cfg = AppConfig {
            templates: crate::config::TemplateConfig {
                dir: Some(PathBuf::from("/from/config")),
            },
            ..Default::default()
        };
        assert_eq!(resolve_template_root(None, &cfg), PathBuf::from("/from/config"));
    }

    #[test]
    fn builtin_default_is_templates() {
        assert_eq!(
            resolve_template_root(None, &AppConfig::default()),
            PathBuf::from("templates")
        );
    }

    #[test]
    fn project_name_is_the_last_segment() {
        assert_eq!(default_project_name(Path::new("/home/user/my-app")), "my-app");
    }

    #[test]
    fn project_name_falls_back_for_root() {
        assert_eq!(default_project_name(Path::new("/")), "app");
    }
}
