//! Custom request extractors

mod path;

pub use path::QuestionPath;
