//! PostgreSQL implementation of ChoiceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use polls_core::{Choice, ChoiceRepository, NewChoice, RecordId, RepoResult};

use crate::models::ChoiceModel;

use super::error::{map_db_error, map_question_fk_violation};

/// PostgreSQL implementation of ChoiceRepository
#[derive(Clone)]
pub struct PgChoiceRepository {
    pool: PgPool,
}

impl PgChoiceRepository {
    /// Create a new PgChoiceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChoiceRepository for PgChoiceRepository {
    #[instrument(skip(self))]
    async fn find_by_question(&self, question_id: RecordId) -> RepoResult<Vec<Choice>> {
        let results = sqlx::query_as::<_, ChoiceModel>(
            r#"
            SELECT id, question_id, choice_text, votes
            FROM polls_choice
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Choice::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_ranked(&self, question_id: RecordId) -> RepoResult<Vec<Choice>> {
        let results = sqlx::query_as::<_, ChoiceModel>(
            r#"
            SELECT id, question_id, choice_text, votes
            FROM polls_choice
            WHERE question_id = $1
            ORDER BY votes DESC, id ASC
            "#,
        )
        .bind(question_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Choice::from).collect())
    }

    #[instrument(skip(self))]
    async fn increment_votes(&self, question_id: RecordId, choice_id: RecordId) -> RepoResult<bool> {
        // Ownership check and increment in one statement; the database
        // serializes concurrent updates on the row.
        let result = sqlx::query(
            r#"
            UPDATE polls_choice
            SET votes = votes + 1
            WHERE id = $1 AND question_id = $2
            "#,
        )
        .bind(choice_id.into_inner())
        .bind(question_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn create(&self, choice: &NewChoice) -> RepoResult<Choice> {
        let result = sqlx::query_as::<_, ChoiceModel>(
            r#"
            INSERT INTO polls_choice (question_id, choice_text, votes)
            VALUES ($1, $2, 0)
            RETURNING id, question_id, choice_text, votes
            "#,
        )
        .bind(choice.question_id.into_inner())
        .bind(&choice.choice_text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_question_fk_violation(e, choice.question_id))?;

        Ok(Choice::from(result))
    }
}
