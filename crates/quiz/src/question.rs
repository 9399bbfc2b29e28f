use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use quizbank_core::{AggregateId, AggregateRoot};

use crate::choice::{Choice, ChoiceId};
use crate::error::QuizError;
use crate::text::Title;

pub const MIN_POINTS: u32 = 1;
pub const MAX_POINTS: u32 = 100;
pub const DEFAULT_POINTS: u32 = 1;
pub const DEFAULT_MAX_SELECTIONS: u32 = 1;

/// Question identifier (globally unique).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(AggregateId);

impl QuestionId {
    pub fn new() -> Self {
        Self(AggregateId::new())
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

fn default_points() -> u32 {
    DEFAULT_POINTS
}

fn default_max_selections() -> u32 {
    DEFAULT_MAX_SELECTIONS
}

/// Command: CreateQuestion.
///
/// `points` and `max_selections` fall back to their defaults when omitted from
/// the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQuestion {
    pub title: String,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default = "default_max_selections")]
    pub max_selections: u32,
}

impl CreateQuestion {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: DEFAULT_POINTS,
            max_selections: DEFAULT_MAX_SELECTIONS,
        }
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn with_max_selections(mut self, max_selections: u32) -> Self {
        self.max_selections = max_selections;
        self
    }
}

/// Aggregate root: Question.
///
/// Invariants:
/// - title is 1..=200 characters
/// - points is within `MIN_POINTS..=MAX_POINTS`
/// - max_selections is at least 1
/// - choice ids are unique and never reused, even after removal
/// - choices keep insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    title: Title,
    points: u32,
    max_selections: u32,
    choices: Vec<Choice>,
    #[serde(skip)]
    last_choice_id: u64,
    #[serde(skip)]
    version: u64,
}

impl Question {
    /// Create a question with default points and max selections.
    pub fn new(title: impl Into<String>) -> Result<Self, QuizError> {
        Self::create(CreateQuestion::new(title))
    }

    pub fn create(cmd: CreateQuestion) -> Result<Self, QuizError> {
        let title = Title::new(cmd.title)?;

        if !(MIN_POINTS..=MAX_POINTS).contains(&cmd.points) {
            return Err(QuizError::InvalidPoints { points: cmd.points });
        }

        if cmd.max_selections < 1 {
            return Err(QuizError::InvalidMaxSelections {
                max_selections: cmd.max_selections,
            });
        }

        let question = Self {
            id: QuestionId::new(),
            title,
            points: cmd.points,
            max_selections: cmd.max_selections,
            choices: Vec::new(),
            last_choice_id: 0,
            version: 0,
        };

        tracing::debug!(
            question_id = %question.id,
            points = question.points,
            max_selections = question.max_selections,
            "question created"
        );

        Ok(question)
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> u32 {
        self.max_selections
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, choice_id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == choice_id)
    }

    /// Ids of the choices currently flagged correct, in choice order.
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct())
            .map(Choice::id)
            .collect()
    }

    /// Append a new choice with the next id.
    ///
    /// The id counter advances before the text is validated, so a rejected add
    /// still retires its id.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, QuizError> {
        self.last_choice_id += 1;
        let choice_id = ChoiceId::new(self.last_choice_id);
        let choice = Choice::new(choice_id, text, is_correct)?;

        self.choices.push(choice);
        self.version += 1;

        tracing::debug!(question_id = %self.id, choice_id = %choice_id, is_correct, "choice added");

        let index = self.choices.len() - 1;
        Ok(&self.choices[index])
    }

    pub fn remove_choice_by_id(&mut self, choice_id: ChoiceId) -> Result<Choice, QuizError> {
        let position = self
            .choices
            .iter()
            .position(|c| c.id() == choice_id)
            .ok_or(QuizError::InvalidChoiceId(choice_id))?;

        let removed = self.choices.remove(position);
        self.version += 1;

        tracing::debug!(question_id = %self.id, choice_id = %choice_id, "choice removed");

        Ok(removed)
    }

    /// Drop every choice. Ids handed out so far stay retired.
    pub fn remove_all_choices(&mut self) {
        let removed = self.choices.len();
        self.choices.clear();
        self.version += 1;

        tracing::debug!(question_id = %self.id, removed, "all choices removed");
    }

    /// Validate a user's selection against `max_selections` and echo it back.
    ///
    /// Ids are not checked against the question's choices, and no choice is
    /// modified: a selection is not the same thing as the authored correct set.
    pub fn select_choices(&self, choice_ids: &[ChoiceId]) -> Result<Vec<ChoiceId>, QuizError> {
        if choice_ids.len() > self.max_selections as usize {
            return Err(QuizError::TooManySelections {
                max: self.max_selections,
                selected: choice_ids.len(),
            });
        }
        Ok(choice_ids.to_vec())
    }

    /// Replace the correct set: choices in `choice_ids` become correct, all others
    /// become incorrect. Unknown ids are ignored.
    pub fn set_correct_choices<I>(&mut self, choice_ids: I)
    where
        I: IntoIterator<Item = ChoiceId>,
    {
        let correct: HashSet<ChoiceId> = choice_ids.into_iter().collect();
        for choice in &mut self.choices {
            choice.set_correct(correct.contains(&choice.id()));
        }
        self.version += 1;

        tracing::debug!(
            question_id = %self.id,
            correct = self.choices.iter().filter(|c| c.is_correct()).count(),
            "correct choices replaced"
        );
    }

    /// Whether `selection` names exactly the correct choices.
    ///
    /// Order and duplicates are ignored. The selection must first pass
    /// `select_choices`.
    pub fn is_correct_selection(&self, selection: &[ChoiceId]) -> Result<bool, QuizError> {
        let selected: HashSet<ChoiceId> = self.select_choices(selection)?.into_iter().collect();
        let correct: HashSet<ChoiceId> = self.correct_choice_ids().into_iter().collect();
        Ok(selected == correct)
    }

    /// All-or-nothing score: `points` for a correct selection, 0 otherwise.
    pub fn score_selection(&self, selection: &[ChoiceId]) -> Result<u32, QuizError> {
        if self.is_correct_selection(selection)? {
            Ok(self.points)
        } else {
            Ok(0)
        }
    }
}

impl AggregateRoot for Question {
    type Id = QuestionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
