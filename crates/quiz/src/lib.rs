//! Quiz domain module.
//!
//! A `Question` is the aggregate root: it owns its `Choice` entities, hands out
//! their ids, and enforces the title/points/selection rules. Everything here is
//! deterministic in-memory domain logic (no IO, no storage, no HTTP).

pub mod choice;
pub mod error;
pub mod question;
pub mod text;

pub use choice::{Choice, ChoiceId};
pub use error::QuizError;
pub use question::{
    CreateQuestion, DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, MAX_POINTS, MIN_POINTS, Question,
    QuestionId,
};
pub use text::{ChoiceText, LengthViolation, MAX_CHOICE_TEXT_LEN, MAX_TITLE_LEN, Title};
