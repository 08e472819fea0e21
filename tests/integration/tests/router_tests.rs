//! Router tests
//!
//! Drive the full axum application in-process over the in-memory store with
//! a fixed clock. No external services are needed.
//!
//! Run with: cargo test -p integration-tests --test router_tests

use axum::http::StatusCode;
use chrono::{DateTime, Duration, TimeZone, Utc};
use integration_tests::TestRouter;
use polls_common::VoteLookup;
use polls_core::{ChoiceRepository, Question, RecordId};
use polls_service::{DetailView, IndexView, ResultsView, NO_CHOICE_SELECTED};
use serde_json::Value;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn router() -> TestRouter {
    TestRouter::new(now()).unwrap()
}

async fn choice_ids(router: &TestRouter, question: &Question) -> Vec<RecordId> {
    router
        .store
        .find_by_question(question.id)
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect()
}

// ============================================================================
// Index
// ============================================================================

#[tokio::test]
async fn test_index_without_questions() {
    let router = router();

    let response = router.get("/polls/").await.unwrap();
    let index: IndexView = response.expect_json(StatusCode::OK).unwrap();
    assert!(index.latest_question_list.is_empty());
}

#[tokio::test]
async fn test_index_shows_only_visible_questions() {
    let router = router();
    let past = router.store.seed("Past question.", now() - Duration::days(30), &["a", "b"]);
    router.store.seed("Future question.", now() + Duration::days(30), &["a", "b"]);
    router.store.seed("Choiceless question.", now() - Duration::days(2), &[]);
    router.store.seed("Single choice question.", now() - Duration::days(2), &["a"]);

    let response = router.get("/polls/").await.unwrap();
    let index: IndexView = response.expect_json(StatusCode::OK).unwrap();

    assert_eq!(index.latest_question_list.len(), 1);
    assert_eq!(index.latest_question_list[0].id, past.id);
    assert_eq!(index.latest_question_list[0].question_text, "Past question.");
}

#[tokio::test]
async fn test_index_orders_newest_first_and_keeps_five() {
    let router = router();
    let mut expected = Vec::new();
    for days_ago in 1..=6 {
        let question = router
            .store
            .seed(&format!("Question {days_ago}"), now() - Duration::days(days_ago), &["a", "b"]);
        expected.push(question.id);
    }

    let response = router.get("/polls/").await.unwrap();
    let index: IndexView = response.expect_json(StatusCode::OK).unwrap();

    let ids: Vec<RecordId> = index.latest_question_list.iter().map(|q| q.id).collect();
    assert_eq!(ids, expected[..5].to_vec());
}

#[tokio::test]
async fn test_index_json_shape() {
    let router = router();
    let question = router.store.seed("Shape?", now() - Duration::hours(1), &["a", "b"]);

    let response = router.get("/polls/").await.unwrap();
    let body: Value = response.expect_json(StatusCode::OK).unwrap();

    let first = &body["latest_question_list"][0];
    assert_eq!(first["id"], question.id.into_inner());
    assert_eq!(first["question_text"], "Shape?");
    assert_eq!(first["was_published_recently"], true);
    assert!(first["pub_date"].is_string());
}

// ============================================================================
// Detail and results
// ============================================================================

#[tokio::test]
async fn test_detail_of_visible_question() {
    let router = router();
    let question = router.store.seed("Detail?", now() - Duration::days(1), &["one", "two"]);

    let response = router.get(&format!("/polls/{}/", question.id)).await.unwrap();
    let detail: DetailView = response.expect_json(StatusCode::OK).unwrap();

    assert_eq!(detail.question.id, question.id);
    let texts: Vec<&str> = detail.choices.iter().map(|c| c.choice_text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
    assert!(detail.error_message.is_none());
}

#[tokio::test]
async fn test_hidden_questions_are_not_found() {
    let router = router();
    // Scenario: one choice only, published yesterday
    let single = router.store.seed("Single", now() - Duration::days(1), &["only"]);
    // Scenario: two choices, published tomorrow
    let future = router.store.seed("Future", now() + Duration::days(1), &["a", "b"]);

    for question in [&single, &future] {
        let detail = router.get(&format!("/polls/{}/", question.id)).await.unwrap();
        assert_eq!(detail.status, StatusCode::NOT_FOUND, "{}", question.question_text);

        let results = router
            .get(&format!("/polls/{}/results/", question.id))
            .await
            .unwrap();
        assert_eq!(results.status, StatusCode::NOT_FOUND, "{}", question.question_text);
    }
}

#[tokio::test]
async fn test_absent_question_error_body() {
    let router = router();

    let response = router.get("/polls/9999/").await.unwrap();
    let body: Value = response.expect_json(StatusCode::NOT_FOUND).unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_QUESTION");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_malformed_question_id_is_not_found() {
    let router = router();
    router.store.seed("Exists", now() - Duration::days(1), &["a", "b"]);

    for path in ["/polls/abc/", "/polls/-1/", "/polls/1.0/results/"] {
        let response = router.get(path).await.unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }

    let response = router.post_form("/polls/abc/vote/", "choice=1").await.unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_results_rank_choices_by_votes() {
    let router = router();
    let question = router.store.seed("Rank", now() - Duration::days(1), &["x", "y", "z"]);
    let ids = choice_ids(&router, &question).await;

    for choice in [ids[2], ids[2], ids[1]] {
        let response = router
            .post_form(&format!("/polls/{}/vote/", question.id), &format!("choice={choice}"))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::FOUND);
    }

    let response = router
        .get(&format!("/polls/{}/results/", question.id))
        .await
        .unwrap();
    let results: ResultsView = response.expect_json(StatusCode::OK).unwrap();
    let order: Vec<(&str, i32)> = results
        .choices
        .iter()
        .map(|c| (c.choice_text.as_str(), c.votes))
        .collect();
    assert_eq!(order, vec![("z", 2), ("y", 1), ("x", 0)]);
}

// ============================================================================
// Vote
// ============================================================================

#[tokio::test]
async fn test_vote_redirects_to_results() {
    // Scenario: published yesterday with choices A and B, vote for A
    let router = router();
    let question = router.store.seed("Q1", now() - Duration::days(1), &["A", "B"]);
    let ids = choice_ids(&router, &question).await;

    let response = router
        .post_form(&format!("/polls/{}/vote/", question.id), &format!("choice={}", ids[0]))
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::FOUND);
    let expected_location = format!("/polls/{}/results/", question.id);
    assert_eq!(response.location(), Some(expected_location.as_str()));

    let response = router.get(&expected_location).await.unwrap();
    let results: ResultsView = response.expect_json(StatusCode::OK).unwrap();
    assert_eq!(results.choices[0].choice_text, "A");
    assert_eq!(results.choices[0].votes, 1);
    assert_eq!(results.choices[1].votes, 0);
}

#[tokio::test]
async fn test_vote_without_choice_redisplays_detail() {
    let router = router();
    let question = router.store.seed("Q", now() - Duration::days(1), &["A", "B"]);
    let path = format!("/polls/{}/vote/", question.id);

    for response in [
        router.post_form(&path, "").await.unwrap(),
        router.post_form(&path, "other=1").await.unwrap(),
        router.post_empty(&path).await.unwrap(),
    ] {
        let detail: DetailView = response.expect_json(StatusCode::OK).unwrap();
        assert_eq!(detail.error_message.as_deref(), Some(NO_CHOICE_SELECTED));
        assert_eq!(detail.question.id, question.id);
        assert_eq!(detail.choices.len(), 2);
    }

    assert_eq!(router.store.total_votes(), 0);
}

#[tokio::test]
async fn test_vote_with_unknown_or_foreign_choice() {
    let router = router();
    let question = router.store.seed("Mine", now() - Duration::days(1), &["A", "B"]);
    let other = router.store.seed("Other", now() - Duration::days(1), &["C", "D"]);
    let foreign = choice_ids(&router, &other).await[0];
    let path = format!("/polls/{}/vote/", question.id);

    for body in [
        format!("choice={foreign}"),
        "choice=999999".to_string(),
        "choice=abc".to_string(),
    ] {
        let response = router.post_form(&path, &body).await.unwrap();
        let detail: DetailView = response.expect_json(StatusCode::OK).unwrap();
        assert_eq!(detail.error_message.as_deref(), Some(NO_CHOICE_SELECTED), "{body}");
    }

    assert_eq!(router.store.total_votes(), 0);
}

#[tokio::test]
async fn test_vote_on_absent_question_is_not_found() {
    let router = router();

    let response = router.post_form("/polls/4242/vote/", "choice=1").await.unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vote_lookup_policies_on_hidden_question() {
    let visible = TestRouter::new(now()).unwrap();
    let future = visible.store.seed("Future", now() + Duration::days(1), &["A", "B"]);
    let choice = choice_ids(&visible, &future).await[0];

    let response = visible
        .post_form(&format!("/polls/{}/vote/", future.id), &format!("choice={choice}"))
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(visible.store.total_votes(), 0);

    let raw = TestRouter::with_vote_lookup(now(), VoteLookup::Raw).unwrap();
    let future = raw.store.seed("Future", now() + Duration::days(1), &["A", "B"]);
    let choice = choice_ids(&raw, &future).await[0];

    let response = raw
        .post_form(&format!("/polls/{}/vote/", future.id), &format!("choice={choice}"))
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(raw.store.votes(choice), Some(1));
}

#[tokio::test]
async fn test_concurrent_votes_are_all_counted() {
    let router = router();
    let question = router.store.seed("Race", now() - Duration::days(1), &["A", "B"]);
    let target = choice_ids(&router, &question).await[0];
    let path = format!("/polls/{}/vote/", question.id);
    let body = format!("choice={target}");

    let votes = (0..30).map(|_| router.post_form(&path, &body));
    let responses = futures::future::join_all(votes).await;
    assert!(responses
        .into_iter()
        .all(|r| r.unwrap().status == StatusCode::FOUND));

    assert_eq!(router.store.votes(target), Some(30));
}

// ============================================================================
// Health and middleware
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let router = router();

    let response = router.get("/health").await.unwrap();
    let body: Value = response.expect_json(StatusCode::OK).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let router = router();

    let response = router.get("/health/ready").await.unwrap();
    let body: Value = response.expect_json(StatusCode::SERVICE_UNAVAILABLE).unwrap();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["database"], "unhealthy");
}

#[tokio::test]
async fn test_request_id_is_set_and_propagated() {
    let router = router();

    let response = router.get("/health").await.unwrap();
    assert!(response.headers.contains_key("x-request-id"));

    let request = axum::http::Request::builder()
        .uri("/health")
        .header("x-request-id", "test-request-1")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = router.send(request).await.unwrap();
    assert_eq!(response.headers.get("x-request-id").unwrap(), "test-request-1");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let router = router();

    let response = router.get("/polls/1/unknown/").await.unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_trailing_slash_redirects() {
    let router = router();

    for (path, expected) in [
        ("/polls", "/polls/"),
        ("/polls/7", "/polls/7/"),
        ("/polls/7/results", "/polls/7/results/"),
        ("/polls/7/results?page=2", "/polls/7/results/?page=2"),
    ] {
        let response = router.get(path).await.unwrap();
        assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT, "{path}");
        assert_eq!(response.location(), Some(expected));
    }
}

#[tokio::test]
async fn test_vote_without_trailing_slash_is_not_redirected() {
    let router = router();
    let question = router.store.seed("Slash?", now() - Duration::days(1), &["a", "b"]);
    let choice = choice_ids(&router, &question).await[0];

    let path = format!("/polls/{}/vote", question.id);
    let response = router.post_form(&path, &format!("choice={choice}")).await.unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(router.store.total_votes(), 0);
}
