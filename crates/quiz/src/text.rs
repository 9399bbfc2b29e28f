//! Length-bounded text value objects.
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes, so a
//! 200-character title in any script is accepted.

use serde::Serialize;

use quizbank_core::ValueObject;

use crate::error::QuizError;

/// Maximum number of characters in a question title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum number of characters in a choice text.
pub const MAX_CHOICE_TEXT_LEN: usize = 100;

/// Why a piece of text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthViolation {
    Empty,
    TooLong { max: usize },
}

impl core::fmt::Display for LengthViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LengthViolation::Empty => f.write_str("cannot be empty"),
            LengthViolation::TooLong { max } => {
                write!(f, "cannot be longer than {max} characters")
            }
        }
    }
}

fn check_length(value: &str, max: usize) -> Result<(), LengthViolation> {
    if value.is_empty() {
        return Err(LengthViolation::Empty);
    }
    if value.chars().count() > max {
        return Err(LengthViolation::TooLong { max });
    }
    Ok(())
}

macro_rules! bounded_text {
    ($(#[$meta:meta])* $t:ident, $max:expr, $err:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            pub fn new(value: impl Into<String>) -> Result<Self, QuizError> {
                let value = value.into();
                check_length(&value, $max).map_err($err)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ValueObject for $t {}
    };
}

bounded_text!(
    /// Question title: 1 to `MAX_TITLE_LEN` characters.
    Title,
    MAX_TITLE_LEN,
    QuizError::InvalidTitle
);

bounded_text!(
    /// Choice text: 1 to `MAX_CHOICE_TEXT_LEN` characters.
    ChoiceText,
    MAX_CHOICE_TEXT_LEN,
    QuizError::InvalidChoiceText
);
