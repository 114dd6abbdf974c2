//! The fixed question plan and the typed answers it produces.
//!
//! The collector presents questions in exactly this order and must not start
//! composing until every one of them is answered. Prompt surfaces (human or
//! scripted) walk [`question_plan`] generically and hand the raw results to
//! [`Answers::from_raw`], which is the single place that enforces
//! completeness and answer kinds.

use crate::domain::Framework;
use crate::domain::error::DomainError;

/// One question of the plan.
#[derive(Debug, Clone)]
pub struct Question {
    /// Configuration key the answer is stored under.
    pub name: &'static str,
    /// Text shown to the user.
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

/// How a question is asked and what kind of value it yields.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Pick one value from an ordered, closed set.
    Select { choices: &'static [&'static str] },
    /// Yes/no with a preselected default.
    Confirm { default: bool },
    /// Free text; `None` means an empty answer is acceptable.
    Input { default: Option<String> },
}

/// A raw prompt result, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Choice(String),
    Flag(bool),
    Text(String),
}

/// The ordered questions for one run.
///
/// `project_name_default` is the last path segment of the destination root;
/// it seeds the `projectName` input the same way the current directory name
/// would on a plain in-place run.
pub fn question_plan(project_name_default: &str) -> Vec<Question> {
    const GENERATE_CHOICES: &[&str] = &["react", "angular"];

    vec![
        Question {
            name: "generate",
            prompt: "What kind of app would you like to generate?",
            kind: QuestionKind::Select {
                choices: GENERATE_CHOICES,
            },
        },
        Question {
            name: "nwjs",
            prompt: "Is this an nw.js project?",
            kind: QuestionKind::Confirm { default: false },
        },
        Question {
            name: "projectName",
            prompt: "What is the name of your project? (no spaces, or symbols)",
            kind: QuestionKind::Input {
                default: Some(project_name_default.to_string()),
            },
        },
        Question {
            name: "projectDesc",
            prompt: "Enter a brief project description",
            kind: QuestionKind::Input { default: None },
        },
        Question {
            name: "src",
            prompt: "Do you want to generate the full src folder?",
            kind: QuestionKind::Confirm { default: true },
        },
        Question {
            name: "gulp",
            prompt: "Do you want to generate the gulp files?",
            kind: QuestionKind::Confirm { default: true },
        },
        Question {
            name: "deployGh",
            prompt: "Will this application be deployed to gh-pages?",
            kind: QuestionKind::Confirm { default: false },
        },
    ]
}

/// The validated answers for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub framework: Framework,
    pub nwjs: bool,
    pub project_name: String,
    pub project_desc: String,
    pub src: bool,
    pub gulp: bool,
    pub deploy_gh: bool,
}

impl Answers {
    /// Validate raw prompt results into typed answers.
    ///
    /// Every question of the plan must be present with the matching answer
    /// kind; the `generate` choice must belong to [`Framework::ALL`].
    pub fn from_raw(raw: &[(&str, AnswerValue)]) -> Result<Self, DomainError> {
        fn find<'a>(
            raw: &'a [(&str, AnswerValue)],
            name: &'static str,
        ) -> Result<&'a AnswerValue, DomainError> {
            raw.iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v)
                .ok_or(DomainError::MissingAnswer { question: name })
        }

        fn flag(raw: &[(&str, AnswerValue)], name: &'static str) -> Result<bool, DomainError> {
            match find(raw, name)? {
                AnswerValue::Flag(b) => Ok(*b),
                _ => Err(DomainError::AnswerKindMismatch {
                    question: name,
                    expected: "confirm",
                }),
            }
        }

        fn text(raw: &[(&str, AnswerValue)], name: &'static str) -> Result<String, DomainError> {
            match find(raw, name)? {
                AnswerValue::Text(s) => Ok(s.clone()),
                _ => Err(DomainError::AnswerKindMismatch {
                    question: name,
                    expected: "input",
                }),
            }
        }

        let framework = match find(raw, "generate")? {
            AnswerValue::Choice(s) => s.parse::<Framework>()?,
            _ => {
                return Err(DomainError::AnswerKindMismatch {
                    question: "generate",
                    expected: "select",
                });
            }
        };

        Ok(Self {
            framework,
            nwjs: flag(raw, "nwjs")?,
            project_name: text(raw, "projectName")?,
            project_desc: text(raw, "projectDesc")?,
            src: flag(raw, "src")?,
            gulp: flag(raw, "gulp")?,
            deploy_gh: flag(raw, "deployGh")?,
        })
    }

    /// Answers produced by accepting every default: the first framework
    /// choice, booleans at their preselected values, the destination
    /// directory name, and an empty description.
    pub fn defaults(project_name: impl Into<String>) -> Self {
        Self {
            framework: Framework::ALL[0],
            nwjs: false,
            project_name: project_name.into(),
            project_desc: String::new(),
            src: true,
            gulp: true,
            deploy_gh: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_complete() -> Vec<(&'static str, AnswerValue)> {
        vec![
            ("generate", AnswerValue::Choice("angular".into())),
            ("nwjs", AnswerValue::Flag(false)),
            ("projectName", AnswerValue::Text("demo".into())),
            ("projectDesc", AnswerValue::Text("a demo".into())),
            ("src", AnswerValue::Flag(true)),
            ("gulp", AnswerValue::Flag(true)),
            ("deployGh", AnswerValue::Flag(false)),
        ]
    }

    #[test]
    fn plan_is_fixed_and_ordered() {
        let plan = question_plan("demo");
        let names: Vec<_> = plan.iter().map(|q| q.name).collect();
        assert_eq!(
            names,
            ["generate", "nwjs", "projectName", "projectDesc", "src", "gulp", "deployGh"]
        );
    }

    #[test]
    fn project_name_default_comes_from_destination() {
        let plan = question_plan("my-app");
        let q = plan.iter().find(|q| q.name == "projectName").unwrap();
        match &q.kind {
            QuestionKind::Input { default } => assert_eq!(default.as_deref(), Some("my-app")),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn complete_raw_answers_validate() {
        let answers = Answers::from_raw(&raw_complete()).unwrap();
        assert_eq!(answers.framework, Framework::Angular);
        assert_eq!(answers.project_name, "demo");
        assert!(answers.src);
    }

    #[test]
    fn missing_answer_is_an_error() {
        let mut raw = raw_complete();
        raw.retain(|(n, _)| *n != "gulp");
        assert!(matches!(
            Answers::from_raw(&raw),
            Err(DomainError::MissingAnswer { question: "gulp" })
        ));
    }

    #[test]
    fn wrong_answer_kind_is_an_error() {
        let mut raw = raw_complete();
        for (name, value) in raw.iter_mut() {
            if *name == "src" {
                *value = AnswerValue::Text("yes".into());
            }
        }
        assert!(matches!(
            Answers::from_raw(&raw),
            Err(DomainError::AnswerKindMismatch { question: "src", .. })
        ));
    }

    #[test]
    fn unknown_framework_choice_is_an_error() {
        let mut raw = raw_complete();
        for (name, value) in raw.iter_mut() {
            if *name == "generate" {
                *value = AnswerValue::Choice("svelte".into());
            }
        }
        assert!(matches!(
            Answers::from_raw(&raw),
            Err(DomainError::UnknownChoice { .. })
        ));
    }

    #[test]
    fn defaults_mirror_the_question_plan() {
        let answers = Answers::defaults("demo");
        assert_eq!(answers.framework, Framework::React);
        assert!(!answers.nwjs);
        assert!(answers.src);
        assert!(answers.gulp);
        assert!(!answers.deploy_gh);
        assert!(answers.project_desc.is_empty());
    }
}
