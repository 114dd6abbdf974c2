//! Spindle Core
//!
//! Domain and application layers for the Spindle project generator,
//! following a hexagonal (ports and adapters) split.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          spindle-cli (CLI)              │
//! │   (prompts, arguments, presentation)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Layer                │
//! │  (ComposeService + composition plan)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Filesystem, TemplateRenderer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    spindle-adapters (Infrastructure)    │
//! │  (LocalFilesystem, SimpleRenderer, …)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (Framework, GeneratorConfig, plan)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spindle_core::domain::{Answers, GeneratorConfig, PriorConfig};
//! # fn adapters() -> (Box<dyn spindle_core::application::Filesystem>, Box<dyn spindle_core::application::TemplateRenderer>) { unimplemented!() }
//!
//! // 1. Fold collected answers into the configuration
//! let answers = Answers::defaults("my-app");
//! let config = GeneratorConfig::from_parts(PriorConfig::new(), &answers);
//!
//! // 2. Compose with injected adapters
//! let (filesystem, renderer) = adapters();
//! let service = spindle_core::application::ComposeService::new(filesystem, renderer);
//! service.compose(&config, "templates".as_ref(), ".".as_ref()).unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComposeReport, ComposeService,
        ports::{Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        Answers, AnswerValue, ConfigValue, Framework, GeneratorConfig, PriorConfig, Question,
        QuestionKind, question_plan,
    };
    pub use crate::error::{SpindleError, SpindleResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
