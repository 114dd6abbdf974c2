//! Core domain layer for Spindle.
//!
//! Pure business logic: the framework choice, the question plan, and the
//! configuration fold. No I/O — filesystem and rendering concerns are
//! handled via ports (traits) defined in the application layer.

pub mod config;
pub mod error;
pub mod framework;
pub mod question;

pub use config::{ConfigValue, GeneratorConfig, PriorConfig, keys};
pub use error::{DomainError, ErrorCategory};
pub use framework::Framework;
pub use question::{Answers, AnswerValue, Question, QuestionKind, question_plan};
