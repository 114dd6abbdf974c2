//! The interactive prompt surface.
//!
//! Walks the core question plan in order and produces validated [`Answers`].
//! The surface is a trait so the same walk serves the dialoguer prompter
//! (humans) and the defaults source (`--defaults`, tests). Collection blocks
//! until every question is answered; composition never starts on partial
//! answers.

use spindle_core::domain::{
    Answers, AnswerValue, Framework, Question, QuestionKind, keys, question_plan,
};

use crate::error::{CliError, CliResult};

/// Something that can answer one question of the plan.
pub trait AnswerSource {
    fn ask(&mut self, question: &Question) -> CliResult<AnswerValue>;
}

/// Walk the question plan against `source` and validate the results.
pub fn collect(source: &mut dyn AnswerSource, project_name_default: &str) -> CliResult<Answers> {
    let plan = question_plan(project_name_default);
    let mut raw = Vec::with_capacity(plan.len());

    for question in &plan {
        let value = source.ask(question)?;
        raw.push((question.name, value));
    }

    Answers::from_raw(&raw).map_err(|e| CliError::Core(e.into()))
}

// ── Defaults source ───────────────────────────────────────────────────────────

/// Answers every question with its default: the first select choice, the
/// preselected confirm value, the input default (empty when absent).
pub struct DefaultAnswers {
    /// Overrides the `generate` select when set (`--framework`).
    pub framework: Option<Framework>,
}

impl AnswerSource for DefaultAnswers {
    fn ask(&mut self, question: &Question) -> CliResult<AnswerValue> {
        Ok(match &question.kind {
            QuestionKind::Select { choices } => {
                let choice = match (question.name, self.framework) {
                    (keys::GENERATE, Some(fw)) => fw.as_str(),
                    _ => choices[0],
                };
                AnswerValue::Choice(choice.to_string())
            }
            QuestionKind::Confirm { default } => AnswerValue::Flag(*default),
            QuestionKind::Input { default } => {
                AnswerValue::Text(default.clone().unwrap_or_default())
            }
        })
    }
}

// ── Interactive source ────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
pub use interactive::InteractivePrompter;

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{
        Confirm, Input, Select,
        theme::{ColorfulTheme, SimpleTheme, Theme},
    };

    use super::*;

    /// Dialoguer-backed prompt surface.
    ///
    /// Invalid select/confirm input is re-asked by dialoguer itself; this
    /// type adds no retry logic of its own.
    pub struct InteractivePrompter {
        theme: Box<dyn Theme>,
        /// Overrides the `generate` select when set (`--framework`).
        framework: Option<Framework>,
    }

    impl InteractivePrompter {
        pub fn new(no_color: bool, framework: Option<Framework>) -> Self {
            let theme: Box<dyn Theme> = if no_color {
                Box::new(SimpleTheme)
            } else {
                Box::new(ColorfulTheme::default())
            };
            Self { theme, framework }
        }
    }

    impl AnswerSource for InteractivePrompter {
        fn ask(&mut self, question: &Question) -> CliResult<AnswerValue> {
            match &question.kind {
                QuestionKind::Select { choices } => {
                    if question.name == keys::GENERATE {
                        if let Some(fw) = self.framework {
                            return Ok(AnswerValue::Choice(fw.as_str().to_string()));
                        }
                    }
                    let index = Select::with_theme(self.theme.as_ref())
                        .with_prompt(question.prompt)
                        .items(*choices)
                        .default(0)
                        .interact()
                        .map_err(map_dialoguer_error)?;
                    Ok(AnswerValue::Choice(choices[index].to_string()))
                }
                QuestionKind::Confirm { default } => {
                    let answer = Confirm::with_theme(self.theme.as_ref())
                        .with_prompt(question.prompt)
                        .default(*default)
                        .interact()
                        .map_err(map_dialoguer_error)?;
                    Ok(AnswerValue::Flag(answer))
                }
                QuestionKind::Input { default } => {
                    let mut input = Input::<String>::with_theme(self.theme.as_ref())
                        .with_prompt(question.prompt)
                        .allow_empty(true);
                    if let Some(value) = default {
                        input = input.default(value.clone());
                    }
                    let answer = input.interact_text().map_err(map_dialoguer_error)?;
                    Ok(AnswerValue::Text(answer))
                }
            }
        }
    }

    fn map_dialoguer_error(e: dialoguer::Error) -> CliError {
        match e {
            dialoguer::Error::IO(io_err)
                if io_err.kind() == std::io::ErrorKind::Interrupted =>
            {
                CliError::Cancelled
            }
            dialoguer::Error::IO(io_err) => CliError::IoError {
                message: "prompt failed".into(),
                source: io_err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_source_produces_default_answers() {
        let mut source = DefaultAnswers { framework: None };
        let answers = collect(&mut source, "my-app").unwrap();
        assert_eq!(answers, Answers::defaults("my-app"));
    }

    #[test]
    fn framework_override_replaces_the_first_choice() {
        let mut source = DefaultAnswers {
            framework: Some(Framework::Angular),
        };
        let answers = collect(&mut source, "my-app").unwrap();
        assert_eq!(answers.framework, Framework::Angular);
        // everything else stays at its default
        assert!(answers.src);
        assert!(!answers.deploy_gh);
    }

    #[test]
    fn collect_surfaces_source_errors() {
        struct Failing;
        impl AnswerSource for Failing {
            fn ask(&mut self, _q: &Question) -> CliResult<AnswerValue> {
                Err(CliError::Cancelled)
            }
        }
        assert!(matches!(
            collect(&mut Failing, "x"),
            Err(CliError::Cancelled)
        ));
    }
}
