//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Choice, NewChoice, NewQuestion, Question};
use crate::error::DomainError;
use crate::value_objects::RecordId;
use crate::visibility::VisibleQuestionQuery;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Question Repository
// ============================================================================

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find question by ID, ignoring visibility
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Question>>;

    /// Find questions passing the visibility rule, newest first
    async fn find_visible(&self, query: VisibleQuestionQuery) -> RepoResult<Vec<Question>>;

    /// Store a new question
    async fn create(&self, question: &NewQuestion) -> RepoResult<Question>;

    /// Delete a question together with its choices
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Choice Repository
// ============================================================================

#[async_trait]
pub trait ChoiceRepository: Send + Sync {
    /// List a question's choices in identifier order
    async fn find_by_question(&self, question_id: RecordId) -> RepoResult<Vec<Choice>>;

    /// List a question's choices, most votes first, ties in identifier order
    async fn find_ranked(&self, question_id: RecordId) -> RepoResult<Vec<Choice>>;

    /// Add one vote to a choice owned by the given question
    ///
    /// The increment is evaluated by the store, never read-modify-write.
    /// Returns `false` without changing anything when the choice does not
    /// exist or belongs to another question.
    async fn increment_votes(&self, question_id: RecordId, choice_id: RecordId) -> RepoResult<bool>;

    /// Store a new choice with zero votes
    async fn create(&self, choice: &NewChoice) -> RepoResult<Choice>;
}
