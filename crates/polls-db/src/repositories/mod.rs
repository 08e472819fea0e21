//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in polls-core.

mod choice;
mod error;
mod question;

pub use choice::PgChoiceRepository;
pub use question::PgQuestionRepository;
