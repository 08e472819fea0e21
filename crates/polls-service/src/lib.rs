//! # polls-service
//!
//! Application layer: assembles the index, detail and results views and runs
//! the vote transaction on top of the repository traits.

pub mod dto;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod services;

pub use dto::{ChoiceView, DetailView, IndexView, QuestionView, ResultsView};
pub use services::{
    PollService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, VoteOutcome,
    NO_CHOICE_SELECTED,
};
