//! Poll service
//!
//! The four poll operations. Every read path resolves its question through
//! [`VisibleQuestionQuery`], so hidden and absent questions both surface as
//! `UNKNOWN_QUESTION`.

use chrono::{DateTime, Utc};
use polls_common::VoteLookup;
use polls_core::{DomainError, Question, RecordId, VisibleQuestionQuery};
use tracing::{debug, info, instrument};

use crate::dto::{DetailView, IndexView, QuestionView, ResultsView};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Message shown when a vote names no usable choice
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

/// What a vote submission led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    /// One vote was added; continue to the question's results
    Recorded { question_id: RecordId },
    /// Nothing was changed; show the detail view again with an error message
    InvalidSelection(DetailView),
}

/// Poll service
pub struct PollService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PollService<'a> {
    /// Create a new PollService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The latest visible questions, newest first
    #[instrument(skip(self))]
    pub async fn index(&self) -> ServiceResult<IndexView> {
        let now = self.ctx.clock().now();

        let questions = self
            .ctx
            .question_repo()
            .find_visible(VisibleQuestionQuery::latest(now))
            .await?;

        Ok(IndexView {
            latest_question_list: questions.iter().map(|q| QuestionView::at(q, now)).collect(),
        })
    }

    /// A visible question with its choices
    #[instrument(skip(self))]
    pub async fn detail(&self, question_id: RecordId) -> ServiceResult<DetailView> {
        let now = self.ctx.clock().now();
        let question = self.visible_question(question_id, now).await?;

        let choices = self.ctx.choice_repo().find_by_question(question.id).await?;

        Ok(DetailView::new(&question, &choices, now))
    }

    /// A visible question with its choices ranked by votes
    #[instrument(skip(self))]
    pub async fn results(&self, question_id: RecordId) -> ServiceResult<ResultsView> {
        let now = self.ctx.clock().now();
        let question = self.visible_question(question_id, now).await?;

        let choices = self.ctx.choice_repo().find_ranked(question.id).await?;

        Ok(ResultsView::new(&question, &choices, now))
    }

    /// Record one vote for `choice` on a question
    ///
    /// `choice` is the raw form value. A missing value, one that is not an
    /// identifier, or one naming a choice of another question changes nothing
    /// and yields [`VoteOutcome::InvalidSelection`].
    #[instrument(skip(self))]
    pub async fn vote(
        &self,
        question_id: RecordId,
        choice: Option<&str>,
    ) -> ServiceResult<VoteOutcome> {
        let now = self.ctx.clock().now();

        let question = match self.ctx.vote_lookup() {
            VoteLookup::Visible => self.visible_question(question_id, now).await?,
            VoteLookup::Raw => self
                .ctx
                .question_repo()
                .find_by_id(question_id)
                .await?
                .ok_or(DomainError::QuestionNotFound(question_id))?,
        };

        let choice_id = choice.and_then(|raw| RecordId::parse(raw).ok());

        let recorded = match choice_id {
            Some(choice_id) => {
                self.ctx
                    .choice_repo()
                    .increment_votes(question.id, choice_id)
                    .await?
            }
            None => false,
        };

        if recorded {
            info!(
                question_id = %question.id,
                choice_id = ?choice_id,
                "Vote recorded"
            );
            return Ok(VoteOutcome::Recorded {
                question_id: question.id,
            });
        }

        debug!(question_id = %question.id, choice = ?choice, "Invalid choice selection");

        let choices = self.ctx.choice_repo().find_by_question(question.id).await?;
        let view = DetailView::new(&question, &choices, now).with_error(NO_CHOICE_SELECTED);

        Ok(VoteOutcome::InvalidSelection(view))
    }

    // === Helper methods ===

    async fn visible_question(
        &self,
        question_id: RecordId,
        now: DateTime<Utc>,
    ) -> ServiceResult<Question> {
        let question = self
            .ctx
            .question_repo()
            .find_visible(VisibleQuestionQuery::by_id(now, question_id))
            .await?
            .into_iter()
            .next()
            .ok_or(DomainError::QuestionNotFound(question_id))?;

        Ok(question)
    }
}
