//! Choice entity, owned by a `Question`.

use serde::{Deserialize, Serialize};

use quizbank_core::Entity;

use crate::error::QuizError;
use crate::text::ChoiceText;

/// Choice identifier, unique within its owning question.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(u64);

impl ChoiceId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One answer option of a question.
///
/// The id is assigned by the owning question. Only the question may flip
/// `is_correct` (see `Question::set_correct_choices`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: ChoiceText,
    is_correct: bool,
}

impl Choice {
    pub fn new(id: ChoiceId, text: impl Into<String>, is_correct: bool) -> Result<Self, QuizError> {
        Ok(Self {
            id,
            text: ChoiceText::new(text)?,
            is_correct,
        })
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}

impl Entity for Choice {
    type Id = ChoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
