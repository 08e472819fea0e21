//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chrono::{DateTime, Utc};
use polls_core::{Choice, ChoiceRepository, NewChoice, NewQuestion, Question, QuestionRepository};
use polls_db::{PgChoiceRepository, PgPool, PgQuestionRepository};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Question text that no other test uses
pub fn unique_question_text(prefix: &str) -> String {
    format!("{prefix} #{}-{}", std::process::id(), unique_suffix())
}

/// A stored question with its choices in identifier order
#[derive(Debug, Clone)]
pub struct SeededQuestion {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl SeededQuestion {
    /// Path of the question's detail page
    pub fn detail_path(&self) -> String {
        format!("/polls/{}/", self.question.id)
    }

    /// Path of the question's results page
    pub fn results_path(&self) -> String {
        format!("/polls/{}/results/", self.question.id)
    }

    /// Path the vote form posts to
    pub fn vote_path(&self) -> String {
        format!("/polls/{}/vote/", self.question.id)
    }

    /// Form value selecting the n-th choice
    pub fn choice_value(&self, index: usize) -> String {
        self.choices[index].id.to_string()
    }
}

/// Insert a question and its choices into PostgreSQL
pub async fn seed_question(
    pool: &PgPool,
    prefix: &str,
    pub_date: DateTime<Utc>,
    choices: &[&str],
) -> Result<SeededQuestion> {
    let questions = PgQuestionRepository::new(pool.clone());
    let choice_repo = PgChoiceRepository::new(pool.clone());

    let question = questions
        .create(&NewQuestion::new(unique_question_text(prefix), pub_date)?)
        .await?;

    let mut created = Vec::with_capacity(choices.len());
    for text in choices {
        created.push(choice_repo.create(&NewChoice::new(question.id, *text)?).await?);
    }

    Ok(SeededQuestion {
        question,
        choices: created,
    })
}
