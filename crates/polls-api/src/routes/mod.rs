//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, polls};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(poll_routes()).merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Poll routes
fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/polls/", get(polls::index))
        .route("/polls/:question_id/", get(polls::detail))
        .route("/polls/:question_id/results/", get(polls::results))
        .route("/polls/:question_id/vote/", post(polls::vote))
        // Pages reached without their trailing slash; votes must post to the exact path
        .route("/polls", get(polls::append_slash))
        .route("/polls/:question_id", get(polls::append_slash))
        .route("/polls/:question_id/results", get(polls::append_slash))
}
