//! Error handling utilities for repositories

use polls_core::{DomainError, RecordId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign key violation to a missing question, anything else to a database error
pub fn map_question_fk_violation(e: SqlxError, question_id: RecordId) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return question_not_found(question_id);
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "question not found" error
pub fn question_not_found(id: RecordId) -> DomainError {
    DomainError::QuestionNotFound(id)
}
