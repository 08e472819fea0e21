//! Choice database model

use sqlx::FromRow;

/// Database model for polls_choice table
#[derive(Debug, Clone, FromRow)]
pub struct ChoiceModel {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i32,
}
