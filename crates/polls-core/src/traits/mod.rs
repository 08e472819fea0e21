//! Ports the infrastructure layer implements

mod clock;
mod repositories;

pub use clock::{Clock, FixedClock, SystemClock};
pub use repositories::{ChoiceRepository, QuestionRepository, RepoResult};
