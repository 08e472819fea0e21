//! Choice entity - one answer to a question, with its vote tally

use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Maximum length of a choice's text
pub const CHOICE_TEXT_MAX_LEN: usize = 200;

/// Choice entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: RecordId,
    pub question_id: RecordId,
    pub choice_text: String,
    pub votes: i32,
}

impl Choice {
    /// Check if the choice belongs to the given question
    #[inline]
    pub fn belongs_to(&self, question_id: RecordId) -> bool {
        self.question_id == question_id
    }

    /// Add a single vote
    pub fn record_vote(&mut self) {
        self.votes = self.votes.saturating_add(1);
    }
}

/// Sort choices for a results view: most votes first, ties in identifier order
pub fn rank_by_votes(choices: &mut [Choice]) {
    choices.sort_by(|a, b| b.votes.cmp(&a.votes).then(a.id.cmp(&b.id)));
}

/// A choice that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChoice {
    pub question_id: RecordId,
    pub choice_text: String,
}

impl NewChoice {
    /// Create a new choice for a question, validating its text
    pub fn new(question_id: RecordId, choice_text: impl Into<String>) -> Result<Self, DomainError> {
        let choice_text = choice_text.into();
        if choice_text.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "choice text must not be empty".to_string(),
            ));
        }
        if choice_text.chars().count() > CHOICE_TEXT_MAX_LEN {
            return Err(DomainError::ContentTooLong {
                max: CHOICE_TEXT_MAX_LEN,
            });
        }
        Ok(Self {
            question_id,
            choice_text,
        })
    }
}
