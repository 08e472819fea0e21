//! Question entity - a poll question with a publication date

use chrono::{DateTime, Duration, Utc};

use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Maximum length of a question's text
pub const QUESTION_TEXT_MAX_LEN: usize = 200;

/// Question entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: RecordId,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Check if the question was published within the last day
    ///
    /// Future publication dates are never "recent".
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}

/// A question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl NewQuestion {
    /// Create a new question, validating its text
    pub fn new(question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Result<Self, DomainError> {
        let question_text = question_text.into();
        if question_text.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "question text must not be empty".to_string(),
            ));
        }
        if question_text.chars().count() > QUESTION_TEXT_MAX_LEN {
            return Err(DomainError::ContentTooLong {
                max: QUESTION_TEXT_MAX_LEN,
            });
        }
        Ok(Self {
            question_text,
            pub_date,
        })
    }
}
