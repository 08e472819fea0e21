//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Migrations are applied on server start. Other tests may share the
//! database, so every assertion targets rows this test created.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use integration_tests::{assert_json, assert_status, check_test_env, seed_question, TestServer};
use polls_core::ChoiceRepository;
use polls_db::PgChoiceRepository;
use polls_service::{DetailView, IndexView, ResultsView, NO_CHOICE_SELECTED};
use reqwest::{header, StatusCode};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Poll Tests
// ============================================================================

#[tokio::test]
async fn test_index_lists_at_most_five_visible_questions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let future = seed_question(&server.pool, "Future", Utc::now() + Duration::days(1), &["a", "b"])
        .await
        .unwrap();
    seed_question(&server.pool, "Visible", Utc::now() - Duration::minutes(1), &["a", "b"])
        .await
        .unwrap();

    let response = server.get("/polls/").await.unwrap();
    let index: IndexView = assert_json(response, StatusCode::OK).await.unwrap();

    let listed = &index.latest_question_list;
    assert!(!listed.is_empty());
    assert!(listed.len() <= 5);
    assert!(listed.windows(2).all(|w| w[0].pub_date >= w[1].pub_date));
    assert!(listed.iter().all(|q| q.pub_date <= Utc::now()));
    assert!(listed.iter().all(|q| q.id != future.question.id));
}

#[tokio::test]
async fn test_vote_and_results_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeded = seed_question(&server.pool, "Q1", Utc::now() - Duration::days(1), &["A", "B"])
        .await
        .unwrap();

    let response = server.get(&seeded.detail_path()).await.unwrap();
    let detail: DetailView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.choices.len(), 2);

    let choice = seeded.choice_value(0);
    let response = server
        .post_form(&seeded.vote_path(), &[("choice", choice.as_str())])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        seeded.results_path().as_str()
    );

    let response = server.get(&seeded.results_path()).await.unwrap();
    let results: ResultsView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(results.choices[0].choice_text, "A");
    assert_eq!(results.choices[0].votes, 1);
    assert_eq!(results.choices[1].votes, 0);
}

#[tokio::test]
async fn test_hidden_questions_are_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let single = seed_question(&server.pool, "Q2", Utc::now() - Duration::days(1), &["only"])
        .await
        .unwrap();
    let future = seed_question(&server.pool, "Q3", Utc::now() + Duration::days(1), &["a", "b"])
        .await
        .unwrap();

    for seeded in [&single, &future] {
        let response = server.get(&seeded.detail_path()).await.unwrap();
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

        let response = server.get(&seeded.results_path()).await.unwrap();
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    }
}

#[tokio::test]
async fn test_vote_without_choice_changes_nothing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeded = seed_question(&server.pool, "Empty vote", Utc::now() - Duration::days(1), &["A", "B"])
        .await
        .unwrap();

    let response = server.post_form(&seeded.vote_path(), &[]).await.unwrap();
    let detail: DetailView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.error_message.as_deref(), Some(NO_CHOICE_SELECTED));

    let choices = PgChoiceRepository::new(server.pool.clone())
        .find_by_question(seeded.question.id)
        .await
        .unwrap();
    assert!(choices.iter().all(|c| c.votes == 0));
}

#[tokio::test]
async fn test_concurrent_votes_are_all_counted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeded = seed_question(&server.pool, "Race", Utc::now() - Duration::days(1), &["A", "B"])
        .await
        .unwrap();
    let choice = seeded.choice_value(1);
    let path = seeded.vote_path();
    let form = [("choice", choice.as_str())];

    let votes = (0..20).map(|_| server.post_form(&path, &form));
    let responses = futures::future::join_all(votes).await;
    assert!(responses
        .into_iter()
        .all(|r| r.unwrap().status() == StatusCode::FOUND));

    let ranked = PgChoiceRepository::new(server.pool.clone())
        .find_ranked(seeded.question.id)
        .await
        .unwrap();
    assert_eq!(ranked[0].id, seeded.choices[1].id);
    assert_eq!(ranked[0].votes, 20);
}
