//! Data transfer objects for API responses
//!
//! - Response DTOs for serializing the poll views
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod responses;

pub use responses::{
    ChoiceView, DetailView, HealthChecks, HealthResponse, IndexView, QuestionView,
    ReadinessResponse, ResultsView,
};
