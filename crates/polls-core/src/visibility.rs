//! Visibility rule for questions
//!
//! A question is shown only once its publication date has passed and it owns
//! more than one choice. Listing, detail and results all go through
//! [`VisibleQuestionQuery`], so the rule cannot drift between read paths.

use chrono::{DateTime, Utc};

use crate::entities::Question;
use crate::value_objects::RecordId;

/// Minimum number of choices a question needs before it is shown
pub const MIN_VISIBLE_CHOICES: i64 = 2;

/// Number of questions on the index page
pub const LATEST_QUESTIONS_LIMIT: i64 = 5;

/// Check the visibility rule for a question's publication date and choice count
#[inline]
pub fn is_visible(pub_date: DateTime<Utc>, choice_count: i64, now: DateTime<Utc>) -> bool {
    pub_date <= now && choice_count >= MIN_VISIBLE_CHOICES
}

/// Query over visible questions, ordered by publication date descending
///
/// `now` is always explicit; implementations must not read a clock of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleQuestionQuery {
    pub now: DateTime<Utc>,
    /// Restrict to a single question
    pub id: Option<RecordId>,
    /// Truncate the result; `None` means unlimited
    pub limit: Option<i64>,
}

impl VisibleQuestionQuery {
    /// The index listing: the most recent visible questions
    pub fn latest(now: DateTime<Utc>) -> Self {
        Self {
            now,
            id: None,
            limit: Some(LATEST_QUESTIONS_LIMIT),
        }
    }

    /// A single visible question by identifier
    pub fn by_id(now: DateTime<Utc>, id: RecordId) -> Self {
        Self {
            now,
            id: Some(id),
            limit: None,
        }
    }

    /// Check whether a question with the given choice count matches this query
    ///
    /// Ordering and truncation are not part of this check.
    pub fn admits(&self, question: &Question, choice_count: i64) -> bool {
        self.id.is_none_or(|id| id == question.id)
            && is_visible(question.pub_date, choice_count, self.now)
    }
}
