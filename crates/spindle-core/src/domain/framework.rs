//! The framework choice offered by the first question.
//!
//! The choice is a closed enum and the flag key comes from an explicit
//! mapping; an unexpected value can never reach the composition plan.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// A front-end framework the generator can scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    Angular,
}

impl Framework {
    /// Every offered choice, in prompt order. The first entry is the
    /// default when answers are scripted rather than typed.
    pub const ALL: [Framework; 2] = [Framework::React, Framework::Angular];

    /// The answer value stored under the `generate` key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Angular => "angular",
        }
    }

    /// Configuration key of the boolean flag this choice switches on.
    pub fn flag_key(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Angular => "angular",
        }
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "react" => Ok(Self::React),
            "angular" => Ok(Self::Angular),
            other => Err(DomainError::UnknownChoice {
                question: "generate",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for fw in Framework::ALL {
            assert_eq!(fw.as_str().parse::<Framework>().unwrap(), fw);
        }
    }

    #[test]
    fn unknown_choice_is_rejected() {
        assert!(matches!(
            "vue".parse::<Framework>(),
            Err(DomainError::UnknownChoice { question: "generate", .. })
        ));
    }

    #[test]
    fn flag_keys_match_answer_values() {
        // The persisted flag and the `generate` answer share spelling; the
        // composition plan's guards rely on it.
        for fw in Framework::ALL {
            assert_eq!(fw.flag_key(), fw.as_str());
        }
    }

    #[test]
    fn react_is_the_default_choice() {
        assert_eq!(Framework::ALL[0], Framework::React);
    }
}
