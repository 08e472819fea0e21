//! Domain entities - core business objects

mod choice;
mod question;

pub use choice::{rank_by_votes, Choice, NewChoice, CHOICE_TEXT_MAX_LEN};
pub use question::{NewQuestion, Question, QUESTION_TEXT_MAX_LEN};
