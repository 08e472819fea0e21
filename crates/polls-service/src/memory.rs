//! In-memory repositories
//!
//! A single store implementing both repository traits, for tests that run
//! without PostgreSQL. Behaviour mirrors the SQL implementations, including
//! the visibility query and the ownership check on vote increments.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use polls_core::{
    Choice, ChoiceRepository, DomainError, NewChoice, NewQuestion, Question, QuestionRepository,
    RecordId, RepoResult, VisibleQuestionQuery,
};

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<RecordId, Question>,
    choices: BTreeMap<RecordId, Choice>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> RecordId {
        self.last_id += 1;
        RecordId::new(self.last_id)
    }

    fn choice_count(&self, question_id: RecordId) -> i64 {
        self.choices.values().filter(|c| c.belongs_to(question_id)).count() as i64
    }

    fn choices_of(&self, question_id: RecordId) -> Vec<Choice> {
        // BTreeMap iteration is already in identifier order
        self.choices
            .values()
            .filter(|c| c.belongs_to(question_id))
            .cloned()
            .collect()
    }
}

/// Question and choice tables behind one lock
#[derive(Debug, Clone, Default)]
pub struct InMemoryPollStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryPollStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a question with the given choices, skipping text validation
    pub fn seed(&self, question_text: &str, pub_date: DateTime<Utc>, choices: &[&str]) -> Question {
        let mut tables = self.tables.write();

        let question = Question {
            id: tables.next_id(),
            question_text: question_text.to_string(),
            pub_date,
        };
        tables.questions.insert(question.id, question.clone());

        for choice_text in choices {
            let choice = Choice {
                id: tables.next_id(),
                question_id: question.id,
                choice_text: (*choice_text).to_string(),
                votes: 0,
            };
            tables.choices.insert(choice.id, choice);
        }

        question
    }

    /// Current vote count of a choice
    pub fn votes(&self, choice_id: RecordId) -> Option<i32> {
        self.tables.read().choices.get(&choice_id).map(|c| c.votes)
    }

    /// Sum of votes over every stored choice
    pub fn total_votes(&self) -> i64 {
        self.tables
            .read()
            .choices
            .values()
            .map(|c| i64::from(c.votes))
            .sum()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryPollStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Question>> {
        Ok(self.tables.read().questions.get(&id).cloned())
    }

    async fn find_visible(&self, query: VisibleQuestionQuery) -> RepoResult<Vec<Question>> {
        let tables = self.tables.read();

        let mut visible: Vec<Question> = tables
            .questions
            .values()
            .filter(|q| query.admits(q, tables.choice_count(q.id)))
            .cloned()
            .collect();

        visible.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
        if let Some(limit) = query.limit {
            visible.truncate(usize::try_from(limit).unwrap_or(0));
        }

        Ok(visible)
    }

    async fn create(&self, question: &NewQuestion) -> RepoResult<Question> {
        let mut tables = self.tables.write();

        let question = Question {
            id: tables.next_id(),
            question_text: question.question_text.clone(),
            pub_date: question.pub_date,
        };
        tables.questions.insert(question.id, question.clone());

        Ok(question)
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut tables = self.tables.write();

        if tables.questions.remove(&id).is_none() {
            return Err(DomainError::QuestionNotFound(id));
        }
        tables.choices.retain(|_, c| !c.belongs_to(id));

        Ok(())
    }
}

#[async_trait]
impl ChoiceRepository for InMemoryPollStore {
    async fn find_by_question(&self, question_id: RecordId) -> RepoResult<Vec<Choice>> {
        Ok(self.tables.read().choices_of(question_id))
    }

    async fn find_ranked(&self, question_id: RecordId) -> RepoResult<Vec<Choice>> {
        let mut choices = self.tables.read().choices_of(question_id);
        polls_core::rank_by_votes(&mut choices);
        Ok(choices)
    }

    async fn increment_votes(&self, question_id: RecordId, choice_id: RecordId) -> RepoResult<bool> {
        let mut tables = self.tables.write();

        match tables.choices.get_mut(&choice_id) {
            Some(choice) if choice.belongs_to(question_id) => {
                choice.record_vote();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn create(&self, choice: &NewChoice) -> RepoResult<Choice> {
        let mut tables = self.tables.write();

        if !tables.questions.contains_key(&choice.question_id) {
            return Err(DomainError::QuestionNotFound(choice.question_id));
        }

        let choice = Choice {
            id: tables.next_id(),
            question_id: choice.question_id,
            choice_text: choice.choice_text.clone(),
            votes: 0,
        };
        tables.choices.insert(choice.id, choice.clone());

        Ok(choice)
    }
}
