//! Business logic services
//!
//! Service layer implementations that resolve questions through the
//! visibility rule and orchestrate the repositories.

pub mod context;
pub mod error;
pub mod poll;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use poll::{PollService, VoteOutcome, NO_CHOICE_SELECTED};
