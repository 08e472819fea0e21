//! Path parameter extractors
//!
//! Type-safe extraction of record identifiers from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use polls_core::RecordId;

use crate::response::ApiError;

/// The `question_id` segment of a poll route
///
/// A segment that is not a non-negative integer is rejected as not found,
/// the same as an identifier with no question behind it.
#[derive(Debug, Clone, Copy)]
pub struct QuestionPath(pub RecordId);

#[async_trait]
impl<S> FromRequestParts<S> for QuestionPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let id = RecordId::parse(&raw)
            .map_err(|_| ApiError::invalid_path(format!("question {raw}")))?;

        Ok(QuestionPath(id))
    }
}
