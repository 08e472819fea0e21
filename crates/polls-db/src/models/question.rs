//! Question database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for polls_question table
#[derive(Debug, Clone, FromRow)]
pub struct QuestionModel {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}
