//! PostgreSQL implementation of QuestionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use polls_core::{NewQuestion, Question, QuestionRepository, RecordId, RepoResult, VisibleQuestionQuery};

use crate::models::QuestionModel;

use super::error::{map_db_error, question_not_found};

/// PostgreSQL implementation of QuestionRepository
#[derive(Clone)]
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    /// Create a new PgQuestionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Question>> {
        let result = sqlx::query_as::<_, QuestionModel>(
            r#"
            SELECT id, question_text, pub_date
            FROM polls_question
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Question::from))
    }

    #[instrument(skip(self))]
    async fn find_visible(&self, query: VisibleQuestionQuery) -> RepoResult<Vec<Question>> {
        // One statement serves every read path; a NULL limit means no limit.
        let results = sqlx::query_as::<_, QuestionModel>(
            r#"
            SELECT q.id, q.question_text, q.pub_date
            FROM polls_question q
            JOIN polls_choice c ON c.question_id = q.id
            WHERE q.pub_date <= $1
              AND ($2::BIGINT IS NULL OR q.id = $2)
            GROUP BY q.id
            HAVING COUNT(c.id) >= $3
            ORDER BY q.pub_date DESC, q.id DESC
            LIMIT $4
            "#,
        )
        .bind(query.now)
        .bind(query.id.map(RecordId::into_inner))
        .bind(polls_core::MIN_VISIBLE_CHOICES)
        .bind(query.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Question::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, question: &NewQuestion) -> RepoResult<Question> {
        let result = sqlx::query_as::<_, QuestionModel>(
            r#"
            INSERT INTO polls_question (question_text, pub_date)
            VALUES ($1, $2)
            RETURNING id, question_text, pub_date
            "#,
        )
        .bind(&question.question_text)
        .bind(question.pub_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Question::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        // Choices go with the question through ON DELETE CASCADE
        let result = sqlx::query(
            r#"
            DELETE FROM polls_question WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(question_not_found(id));
        }

        Ok(())
    }
}
