//! Quiz error taxonomy.
//!
//! The `Display` output of every variant is part of the public contract: callers
//! match on these exact strings.

use thiserror::Error;

use quizbank_core::DomainError;

use crate::choice::ChoiceId;
use crate::question::{MAX_POINTS, MIN_POINTS};
use crate::text::LengthViolation;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Title {0}")]
    InvalidTitle(LengthViolation),

    #[error("Points must be between {} and {}", MIN_POINTS, MAX_POINTS)]
    InvalidPoints { points: u32 },

    #[error("Max selections must be at least 1")]
    InvalidMaxSelections { max_selections: u32 },

    #[error("Text {0}")]
    InvalidChoiceText(LengthViolation),

    #[error("Invalid choice id {0}")]
    InvalidChoiceId(ChoiceId),

    #[error("Cannot select more than {max} choices")]
    TooManySelections { max: u32, selected: usize },
}

impl From<QuizError> for DomainError {
    fn from(err: QuizError) -> Self {
        let msg = err.to_string();
        match err {
            QuizError::InvalidTitle(_)
            | QuizError::InvalidPoints { .. }
            | QuizError::InvalidMaxSelections { .. }
            | QuizError::InvalidChoiceText(_) => DomainError::validation(msg),
            QuizError::InvalidChoiceId(_) => DomainError::invalid_id(msg),
            QuizError::TooManySelections { .. } => DomainError::invariant(msg),
        }
    }
}
