//! Service context - dependency container for services
//!
//! Holds the repositories, the clock and the poll policy needed by services.

use std::sync::Arc;

use polls_common::VoteLookup;
use polls_core::{ChoiceRepository, Clock, QuestionRepository, SystemClock};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    question_repo: Arc<dyn QuestionRepository>,
    choice_repo: Arc<dyn ChoiceRepository>,

    // Source of "now" for the visibility rule
    clock: Arc<dyn Clock>,

    vote_lookup: VoteLookup,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        question_repo: Arc<dyn QuestionRepository>,
        choice_repo: Arc<dyn ChoiceRepository>,
        clock: Arc<dyn Clock>,
        vote_lookup: VoteLookup,
    ) -> Self {
        Self {
            question_repo,
            choice_repo,
            clock,
            vote_lookup,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the question repository
    pub fn question_repo(&self) -> &dyn QuestionRepository {
        self.question_repo.as_ref()
    }

    /// Get the choice repository
    pub fn choice_repo(&self) -> &dyn ChoiceRepository {
        self.choice_repo.as_ref()
    }

    // === Policy ===

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// How the vote path resolves its question
    pub fn vote_lookup(&self) -> VoteLookup {
        self.vote_lookup
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("vote_lookup", &self.vote_lookup)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// The clock defaults to [`SystemClock`] and the vote lookup to its default policy.
pub struct ServiceContextBuilder {
    question_repo: Option<Arc<dyn QuestionRepository>>,
    choice_repo: Option<Arc<dyn ChoiceRepository>>,
    clock: Option<Arc<dyn Clock>>,
    vote_lookup: VoteLookup,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            question_repo: None,
            choice_repo: None,
            clock: None,
            vote_lookup: VoteLookup::default(),
        }
    }

    pub fn question_repo(mut self, repo: Arc<dyn QuestionRepository>) -> Self {
        self.question_repo = Some(repo);
        self
    }

    pub fn choice_repo(mut self, repo: Arc<dyn ChoiceRepository>) -> Self {
        self.choice_repo = Some(repo);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn vote_lookup(mut self, vote_lookup: VoteLookup) -> Self {
        self.vote_lookup = vote_lookup;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.question_repo
                .ok_or_else(|| ServiceError::validation("question_repo is required"))?,
            self.choice_repo
                .ok_or_else(|| ServiceError::validation("choice_repo is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.vote_lookup,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
