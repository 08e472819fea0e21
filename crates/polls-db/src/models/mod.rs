//! Database models - SQLx-compatible structs for PostgreSQL tables

mod choice;
mod question;

pub use choice::ChoiceModel;
pub use question::QuestionModel;
