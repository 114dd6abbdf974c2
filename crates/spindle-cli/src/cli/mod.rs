//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use spindle_core::domain::Framework as CoreFramework;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "spindle",
    bin_name = "spindle",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9f6} Interactive web-app project generator",
    long_about = "Spindle asks a handful of questions and generates a web \
                  application skeleton (react or angular) from a template tree.",
    after_help = "EXAMPLES:\n\
        \x20 spindle generate\n\
        \x20 spindle generate my-app --template-dir ./templates\n\
        \x20 spindle generate --defaults --framework angular\n\
        \x20 spindle completions zsh > ~/.zfunc/_spindle",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project into a destination directory.
    #[command(
        visible_alias = "g",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 spindle generate                 # prompt, generate into .\n\
            \x20 spindle generate my-app          # generate into ./my-app\n\
            \x20 spindle generate -y              # accept every default\n\
            \x20 spindle generate -y --framework angular"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 spindle completions bash > ~/.local/share/bash-completion/completions/spindle\n\
            \x20 spindle completions zsh  > ~/.zfunc/_spindle\n\
            \x20 spindle completions fish > ~/.config/fish/completions/spindle.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `spindle generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Destination directory.  Created if missing; defaults to the current
    /// directory.
    #[arg(value_name = "DEST", help = "Destination directory (default: .)")]
    pub dest: Option<PathBuf>,

    /// Template tree to generate from.
    #[arg(
        short = 't',
        long = "template-dir",
        value_name = "DIR",
        help = "Template directory (default: ./templates, or templates.dir from config)"
    )]
    pub template_dir: Option<PathBuf>,

    /// Answer every question with its default instead of prompting.
    #[arg(
        short = 'y',
        long = "defaults",
        help = "Accept every default without prompting"
    )]
    pub defaults: bool,

    /// Answer the framework question up front.
    #[arg(
        long = "framework",
        value_name = "FRAMEWORK",
        value_enum,
        help = "Framework to generate (react or angular)"
    )]
    pub framework: Option<FrameworkChoice>,
}

/// Framework choice as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FrameworkChoice {
    React,
    Angular,
}

impl From<FrameworkChoice> for CoreFramework {
    fn from(choice: FrameworkChoice) -> Self {
        match choice {
            FrameworkChoice::React => CoreFramework::React,
            FrameworkChoice::Angular => CoreFramework::Angular,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `spindle completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
