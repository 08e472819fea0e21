//! # polls-core
//!
//! Domain layer containing the question and choice entities, the visibility rule,
//! the clock abstraction, and the repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;
pub mod visibility;

// Re-export commonly used types at crate root
pub use entities::{
    rank_by_votes, Choice, NewChoice, NewQuestion, Question, CHOICE_TEXT_MAX_LEN,
    QUESTION_TEXT_MAX_LEN,
};
pub use error::DomainError;
pub use traits::{ChoiceRepository, Clock, FixedClock, QuestionRepository, RepoResult, SystemClock};
pub use value_objects::{RecordId, RecordIdParseError};
pub use visibility::{is_visible, VisibleQuestionQuery, LATEST_QUESTIONS_LIMIT, MIN_VISIBLE_CHOICES};
