//! Compose Service - main application orchestrator.
//!
//! Walks the composition plan against a template root and a destination
//! root, executing every step whose guard the configuration satisfies.
//! Manifest fragments accumulate in memory and the merged `package.json` is
//! finalized and written once at the end of the run.
//!
//! Failure semantics: the first filesystem error aborts the run. There is no
//! rollback — files already written stay on disk, possibly leaving a
//! partially generated project behind.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, manifest,
        plan::{Action, MANIFEST_DEST, PLAN},
        ports::{Filesystem, TemplateRenderer},
    },
    domain::GeneratorConfig,
    error::SpindleResult,
};

/// What one composition run did. Returned for display and assertions; the
/// composer's real output is the destination tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeReport {
    /// Labels of the steps whose guard passed, in execution order.
    pub steps_run: Vec<&'static str>,
    /// Number of files written, the merged manifest included.
    pub files_written: usize,
    /// Whether a merged `package.json` was produced.
    pub manifest_written: bool,
}

/// Main composition service.
pub struct ComposeService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
}

impl ComposeService {
    /// Create a new compose service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self {
            filesystem,
            renderer,
        }
    }

    /// Run the full composition plan.
    #[instrument(
        skip_all,
        fields(
            template_root = %template_root.display(),
            dest_root = %dest_root.display(),
        )
    )]
    pub fn compose(
        &self,
        config: &GeneratorConfig,
        template_root: &Path,
        dest_root: &Path,
    ) -> SpindleResult<ComposeReport> {
        let mut report = ComposeReport::default();
        let mut manifest: Option<Value> = None;

        for step in PLAN {
            if !step.guard.allows(config) {
                debug!(step = step.label, "step skipped by guard");
                continue;
            }

            debug!(step = step.label, actions = step.actions.len(), "running step");
            for action in step.actions {
                self.run_action(action, config, template_root, dest_root, &mut manifest, &mut report)?;
            }
            report.steps_run.push(step.label);
        }

        if let Some(merged) = manifest {
            let finalized = manifest::finalize(merged, config, self.renderer.as_ref());
            let rendered = serde_json::to_string_pretty(&finalized).map_err(|e| {
                ApplicationError::ManifestParse {
                    path: MANIFEST_DEST.into(),
                    reason: e.to_string(),
                }
            })?;
            self.write(dest_root, Path::new(MANIFEST_DEST), &rendered, &mut report)?;
            report.manifest_written = true;
        }

        info!(
            steps = report.steps_run.len(),
            files = report.files_written,
            "composition complete"
        );
        Ok(report)
    }

    fn run_action(
        &self,
        action: &Action,
        config: &GeneratorConfig,
        template_root: &Path,
        dest_root: &Path,
        manifest: &mut Option<Value>,
        report: &mut ComposeReport,
    ) -> SpindleResult<()> {
        match action {
            Action::Render { source, dest } => {
                let template = self.filesystem.read_to_string(&template_root.join(source))?;
                let rendered = self.renderer.render(&template, config);
                self.write(dest_root, Path::new(dest), &rendered, report)
            }
            Action::Copy { source, dest } => {
                let content = self.filesystem.read_to_string(&template_root.join(source))?;
                self.write(dest_root, Path::new(dest), &content, report)
            }
            Action::CopyTree { source, dest } => {
                let source_root = template_root.join(source);
                for relative in self.filesystem.walk_files(&source_root)? {
                    let content = self.filesystem.read_to_string(&source_root.join(&relative))?;
                    let target = Path::new(dest).join(&relative);
                    self.write(dest_root, &target, &content, report)?;
                }
                Ok(())
            }
            Action::MergeManifest { fragment } => {
                let path = template_root.join(fragment);
                let text = self.filesystem.read_to_string(&path)?;
                let value: Value =
                    serde_json::from_str(&text).map_err(|e| ApplicationError::ManifestParse {
                        path,
                        reason: e.to_string(),
                    })?;
                match manifest {
                    Some(base) => manifest::merge(base, value),
                    None => *manifest = Some(value),
                }
                Ok(())
            }
        }
    }

    /// Write one destination file, creating parent directories as needed.
    fn write(
        &self,
        dest_root: &Path,
        relative: &Path,
        content: &str,
        report: &mut ComposeReport,
    ) -> SpindleResult<()> {
        let path = dest_root.join(relative);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, content)?;
        report.files_written += 1;
        Ok(())
    }
}
