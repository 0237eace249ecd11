mod common;

use common::{error_message, TestApp};
use news_api::{ArticleResponse, ArticleWrapper, CommentResponse, CommentWrapper, MultipleCommentsWrapper};
use serde_json::json;

async fn comments(app: &TestApp, article_id: i64) -> Vec<CommentResponse> {
    let response = app.get(&format!("/api/articles/{article_id}/comments")).await;
    assert_eq!(response.status().as_u16(), 200);
    response
        .json::<MultipleCommentsWrapper>()
        .await
        .unwrap()
        .comments
}

async fn comment_count(app: &TestApp, article_id: i64) -> i64 {
    app.get(&format!("/api/articles/{article_id}"))
        .await
        .json::<ArticleWrapper<ArticleResponse>>()
        .await
        .unwrap()
        .article
        .comment_count
}

#[tokio::test]
async fn lists_comments_for_an_article() {
    let app = TestApp::spawn().await;
    let comments = comments(&app, 1).await;

    assert_eq!(comments.len(), 11);
    assert_eq!(comments[0].comment_id, 5);
    assert_eq!(comments[0].created_at, "2020-11-03T21:00:00.000Z");
    assert!(comments.iter().all(|c| c.article_id == 1));
    assert!(comments
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[tokio::test]
async fn article_without_comments_lists_empty() {
    let app = TestApp::spawn().await;
    assert!(comments(&app, 2).await.is_empty());
}

#[tokio::test]
async fn list_comments_errors() {
    let app = TestApp::spawn().await;
    assert_eq!(
        error_message(app.get("/api/articles/9999/comments").await, 404).await,
        "Article ID not found"
    );
    assert_eq!(
        error_message(app.get("/api/articles/banana/comments").await, 400).await,
        "Invalid article ID"
    );
}

#[tokio::test]
async fn posted_comment_round_trips() {
    let app = TestApp::spawn().await;
    let response = app
        .post(
            "/api/articles/2/comments",
            json!({ "username": "lurker", "body": "Finally, a laptop article." }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let created: CommentWrapper<CommentResponse> = response.json().await.unwrap();

    let comments = comments(&app, 2).await;
    assert_eq!(comments.len(), 1);
    let stored = &comments[0];
    assert_eq!(stored, &created.comment);
    assert_eq!(stored.comment_id, 19);
    assert_eq!(stored.votes, 0);
    assert_eq!(stored.author, "lurker");
    assert_eq!(stored.body, "Finally, a laptop article.");
    assert_eq!(comment_count(&app, 2).await, 1);
}

#[tokio::test]
async fn post_comment_errors() {
    let app = TestApp::spawn().await;

    assert_eq!(
        error_message(
            app.post("/api/articles/1/comments", json!({ "username": "lurker" }))
                .await,
            400
        )
        .await,
        "Missing required fields"
    );
    assert_eq!(
        error_message(
            app.post(
                "/api/articles/1/comments",
                json!({ "username": "ghost", "body": "boo" })
            )
            .await,
            404
        )
        .await,
        "Username not found"
    );
    assert_eq!(
        error_message(
            app.post(
                "/api/articles/9999/comments",
                json!({ "username": "lurker", "body": "hello?" })
            )
            .await,
            404
        )
        .await,
        "Article ID not found"
    );
}

#[tokio::test]
async fn delete_comment_decrements_comment_count() {
    let app = TestApp::spawn().await;
    let before = comment_count(&app, 9).await;

    let response = app.delete("/api/comments/1").await;
    assert_eq!(response.status().as_u16(), 204);
    assert!(response.bytes().await.unwrap().is_empty());

    assert_eq!(comment_count(&app, 9).await, before - 1);
    assert!(comments(&app, 9).await.iter().all(|c| c.comment_id != 1));
}

#[tokio::test]
async fn delete_comment_errors() {
    let app = TestApp::spawn().await;
    assert_eq!(
        error_message(app.delete("/api/comments/invalid-comment-id").await, 400).await,
        "Invalid comment ID"
    );
    assert_eq!(
        error_message(app.delete("/api/comments/9999").await, 404).await,
        "Comment ID not found"
    );
}

#[tokio::test]
async fn patch_comment_votes() {
    let app = TestApp::spawn().await;

    let response = app.patch("/api/comments/2", json!({ "inc_votes": -4 })).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: CommentWrapper<CommentResponse> = response.json().await.unwrap();
    assert_eq!(body.comment.comment_id, 2);
    assert_eq!(body.comment.votes, 10);
}

#[tokio::test]
async fn patch_comment_errors() {
    let app = TestApp::spawn().await;
    assert_eq!(
        error_message(app.patch("/api/comments/2", json!({})).await, 400).await,
        "Missing inc_votes data in request body"
    );
    assert_eq!(
        error_message(app.patch("/api/comments/2", json!({ "inc_votes": "abc" })).await, 400).await,
        "Invalid inc_votes data in request body"
    );
    assert_eq!(
        error_message(app.patch("/api/comments/9999", json!({ "inc_votes": 1 })).await, 404).await,
        "Comment ID not found"
    );
    assert_eq!(
        error_message(app.patch("/api/comments/two", json!({ "inc_votes": 1 })).await, 400).await,
        "Invalid comment ID"
    );
}

#[tokio::test]
async fn malformed_comment_bodies_are_bad_requests() {
    let app = TestApp::spawn().await;

    let cases = [
        (reqwest::Method::POST, "/api/articles/1/comments", Some("application/json"), "{not json"),
        (reqwest::Method::POST, "/api/articles/1/comments", None, r#"{"username": "lurker"}"#),
        (reqwest::Method::POST, "/api/articles/1/comments", Some("application/json"), r#"{"body": []}"#),
        (reqwest::Method::PATCH, "/api/comments/2", Some("application/json"), "[1"),
    ];
    for (method, path, content_type, body) in cases {
        let response = app.send_raw(method, path, content_type, body).await;
        assert_eq!(error_message(response, 400).await, "Invalid request body");
    }
    assert_eq!(comment_count(&app, 1).await, 11);
}

#[tokio::test]
async fn oversized_comment_vote_deltas_are_invalid() {
    let app = TestApp::spawn().await;
    assert_eq!(
        error_message(
            app.patch("/api/comments/2", json!({ "inc_votes": i64::MAX })).await,
            400
        )
        .await,
        "Invalid inc_votes data in request body"
    );

    let response = app.patch("/api/comments/2", json!({ "inc_votes": -4.0 })).await;
    let body: CommentWrapper<CommentResponse> = response.json().await.unwrap();
    assert_eq!(body.comment.votes, 10);
}
