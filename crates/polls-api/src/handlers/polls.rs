//! Poll handlers
//!
//! Index, detail, results and vote endpoints.

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use polls_core::RecordId;
use polls_service::{DetailView, IndexView, PollService, ResultsView, VoteOutcome};
use serde::Deserialize;

use crate::extractors::QuestionPath;
use crate::response::{ApiResult, Found};
use crate::state::AppState;

/// Form body of a vote
#[derive(Debug, Deserialize)]
pub struct VoteForm {
    /// Identifier of the chosen choice, as submitted
    pub choice: Option<String>,
}

/// Location of a question's results page
pub fn results_location(question_id: RecordId) -> String {
    format!("/polls/{question_id}/results/")
}

/// Latest questions
///
/// GET /polls/
pub async fn index(State(state): State<AppState>) -> ApiResult<Json<IndexView>> {
    let service = PollService::new(state.service_context());
    let response = service.index().await?;
    Ok(Json(response))
}

/// Question with its choices
///
/// GET /polls/{question_id}/
pub async fn detail(
    State(state): State<AppState>,
    QuestionPath(question_id): QuestionPath,
) -> ApiResult<Json<DetailView>> {
    let service = PollService::new(state.service_context());
    let response = service.detail(question_id).await?;
    Ok(Json(response))
}

/// Question with its choices ranked by votes
///
/// GET /polls/{question_id}/results/
pub async fn results(
    State(state): State<AppState>,
    QuestionPath(question_id): QuestionPath,
) -> ApiResult<Json<ResultsView>> {
    let service = PollService::new(state.service_context());
    let response = service.results(question_id).await?;
    Ok(Json(response))
}

/// Cast a vote
///
/// POST /polls/{question_id}/vote/
///
/// A body that is not a readable form counts as a vote without a choice.
pub async fn vote(
    State(state): State<AppState>,
    QuestionPath(question_id): QuestionPath,
    form: Option<Form<VoteForm>>,
) -> ApiResult<Response> {
    let choice = form.as_ref().and_then(|Form(form)| form.choice.as_deref());

    let service = PollService::new(state.service_context());
    let response = match service.vote(question_id, choice).await? {
        VoteOutcome::Recorded { question_id } => Found(results_location(question_id)).into_response(),
        VoteOutcome::InvalidSelection(view) => Json(view).into_response(),
    };

    Ok(response)
}

/// Permanent redirect to the slash-terminated form of a poll page
///
/// GET /polls, /polls/{id}, /polls/{id}/results
pub async fn append_slash(uri: Uri) -> Redirect {
    let location = match uri.query() {
        Some(query) => format!("{}/?{query}", uri.path()),
        None => format!("{}/", uri.path()),
    };
    Redirect::permanent(&location)
}
