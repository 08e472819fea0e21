//! # polls-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `polls-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use polls_db::{create_pool, run_migrations, DatabaseConfig, PgQuestionRepository};
//! use polls_core::{QuestionRepository, VisibleQuestionQuery};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("postgres://localhost/polls", 5, 1)).await?;
//!     run_migrations(&pool).await?;
//!
//!     let questions = PgQuestionRepository::new(pool);
//!     let latest = questions.find_visible(VisibleQuestionQuery::latest(chrono::Utc::now())).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrations::run_migrations;
pub use pool::{create_lazy_pool, create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgChoiceRepository, PgQuestionRepository};
