//! The fixed composition plan.
//!
//! Composition is a sequence of steps, each independently skippable by a
//! guard over the configuration. Steps run in declaration order and actions
//! run in declaration order inside a step; ordering is the only conflict
//! resolution for overlapping destination paths (a later write replaces an
//! earlier one). The `angular` step runs before `react`, so a run with both
//! flags enabled ends up with react's files wherever the two overlap.

use crate::domain::{GeneratorConfig, keys};

/// Destination path of the merged package manifest.
pub const MANIFEST_DEST: &str = "package.json";

/// Condition gating a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// The named configuration flag must be true.
    Flag(&'static str),
    /// Every named configuration flag must be true.
    AllOf(&'static [&'static str]),
}

impl Guard {
    pub fn allows(&self, config: &GeneratorConfig) -> bool {
        match self {
            Self::Always => true,
            Self::Flag(key) => config.flag(key),
            Self::AllOf(all) => all.iter().all(|key| config.flag(key)),
        }
    }
}

/// One unit of work inside a step. `source` paths are relative to the
/// template root, `dest` paths relative to the destination root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Render a template with `{{key}}` substitution and write the result.
    Render {
        source: &'static str,
        dest: &'static str,
    },
    /// Copy one file verbatim.
    Copy {
        source: &'static str,
        dest: &'static str,
    },
    /// Copy a directory tree verbatim, recursively.
    CopyTree {
        source: &'static str,
        dest: &'static str,
    },
    /// Deep-merge a JSON fragment into the manifest accumulator.
    MergeManifest { fragment: &'static str },
}

/// A guarded, ordered group of actions.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub label: &'static str,
    pub guard: Guard,
    pub actions: &'static [Action],
}

/// Every step of a run, in execution order.
pub const PLAN: &[Step] = &[
    Step {
        label: "base",
        guard: Guard::Always,
        actions: &[
            Action::Render { source: "_bower.json", dest: "bower.json" },
            Action::Render { source: "_README.md", dest: "README.md" },
            Action::Render { source: "_eslintrc", dest: ".eslintrc" },
            Action::Render { source: "_sasslint.js", dest: ".sasslint.js" },
            Action::Render { source: "_webpack.config.js", dest: "webpack.config.js" },
            Action::Copy { source: "gitignore", dest: ".gitignore" },
            Action::Copy { source: "Gulpfile.js", dest: "Gulpfile.js" },
            Action::Copy { source: "Procfile", dest: "Procfile" },
            Action::Copy { source: "server.js", dest: "server.js" },
            Action::CopyTree { source: "mocks", dest: "mocks" },
        ],
    },
    Step {
        label: "gulp",
        guard: Guard::Flag(keys::GULP),
        actions: &[
            // Replaces the verbatim Gulpfile from the base step with a
            // substituted rendering.
            Action::Render { source: "Gulpfile.js", dest: "Gulpfile.js" },
            Action::Copy { source: "_gulp_config.js", dest: "gulp/config.js" },
            Action::CopyTree { source: "gulp", dest: "gulp" },
        ],
    },
    Step {
        label: "src",
        guard: Guard::Flag(keys::SRC),
        actions: &[
            Action::MergeManifest { fragment: "_package.json" },
            Action::Render { source: "_src_app_index.jade", dest: "src/app/index.jade" },
            Action::CopyTree { source: "src", dest: "src" },
        ],
    },
    Step {
        label: "angular",
        guard: Guard::AllOf(&[keys::SRC, "angular"]),
        actions: &[
            Action::MergeManifest { fragment: "_package.angular.json" },
            Action::CopyTree { source: "_angular/src/app", dest: "src/app" },
            Action::Render {
                source: "_angular_src/_src_app_components_data_data.js",
                dest: "src/app/components/data/data.js",
            },
            Action::Render {
                source: "_angular_src/_src_app_components_navbar_navbar.js",
                dest: "src/app/components/navbar/navbar.js",
            },
            Action::Render {
                source: "_angular_src/_src_app_index.js",
                dest: "src/app/index.js",
            },
            Action::Render {
                source: "_angular_src/_src_app_main_main.js",
                dest: "src/app/main/main.js",
            },
            Action::Render {
                source: "_angular_src/_src_app_main_things_things.js",
                dest: "src/app/main/things/things.js",
            },
        ],
    },
    Step {
        label: "react",
        guard: Guard::AllOf(&[keys::SRC, "react"]),
        actions: &[
            Action::MergeManifest { fragment: "_package.react.json" },
            Action::CopyTree { source: "_react/src/app", dest: "src/app" },
            Action::CopyTree { source: "_react/src/lib", dest: "src/lib" },
        ],
    },
    Step {
        label: "deploy",
        guard: Guard::AllOf(&[keys::SRC, keys::DEPLOY_GH]),
        actions: &[
            Action::MergeManifest { fragment: "_package.deploy-gh.json" },
            Action::Copy {
                source: "_gulp_tasks_deploy-gh.js",
                dest: "gulp/tasks/deploy-gh.js",
            },
        ],
    },
];
