/*
    End-to-end tests for the HTTP surface

    Drives the full router with in-process requests (no sockets) through
    tower's oneshot, covering the register/login/post/vote/comment flow
    and the error-to-status mapping.
*/

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use driftwood_api::{app, AppState, Config};

fn test_app() -> Router {
    app(AppState::new(Config::for_tests()))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn register(app: &Router, username: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({ "username": username, "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("token in response").to_string()
}

async fn create_post(app: &Router, token: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/posts",
        Some(token),
        Some(json!({
            "type": "text",
            "category": "programming",
            "title": "hello",
            "text": "first post"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["score"], 1);
    assert_eq!(body["upvotePercentage"], 100);
    assert_eq!(body["text"], "first post");
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn register_login_and_duplicate_handling() {
    let app = test_app();

    register(&app, "alice").await;

    // duplicate username answers 422 with the error-list body
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({ "username": "alice", "password": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["param"], "username");
    assert_eq!(body["errors"][0]["value"], "alice");

    // wrong password and unknown user both answer 401
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "username": "alice", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "username": "nobody", "password": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "username": "alice", "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn post_creation_requires_token() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/posts",
        None,
        Some(json!({ "type": "text", "category": "c", "title": "t", "text": "b" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::POST, "/api/posts", Some("garbage"), Some(json!({
        "type": "text", "category": "c", "title": "t", "text": "b"
    })))
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn full_post_vote_comment_flow() {
    let app = test_app();

    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;
    let post_id = create_post(&app, &alice).await;

    // listing shows the post
    let (status, body) = send(&app, Method::GET, "/api/posts/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&app, Method::GET, "/api/posts/programming", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    let (_, body) = send(&app, Method::GET, "/api/posts/cooking", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    let (_, body) = send(&app, Method::GET, "/api/user/alice", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // bob upvotes, switches to downvote, then clears
    let uri = format!("/api/post/{}/upvote", post_id);
    let (status, body) = send(&app, Method::GET, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 2);
    assert_eq!(body["upvotePercentage"], 100);

    let uri = format!("/api/post/{}/downvote", post_id);
    let (_, body) = send(&app, Method::GET, &uri, Some(&bob), None).await;
    assert_eq!(body["score"], 0);
    assert_eq!(body["upvotePercentage"], 50);

    let uri = format!("/api/post/{}/unvote", post_id);
    let (_, body) = send(&app, Method::GET, &uri, Some(&bob), None).await;
    assert_eq!(body["score"], 1);
    assert_eq!(body["upvotePercentage"], 100);

    // comments: bob writes one, alice may not remove it, bob may
    let uri = format!("/api/post/{}", post_id);
    let (status, body) = send(
        &app,
        Method::POST,
        &uri,
        Some(&bob),
        Some(json!({ "comment": "nice post" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let comment_id = body["comments"][0]["id"].as_str().unwrap().to_string();
    assert_eq!(body["comments"][0]["author"]["username"], "bob");

    let uri = format!("/api/post/{}/{}", post_id, comment_id);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["comments"].as_array().unwrap().len(), 0);

    // deletion: bob is not the author, alice is
    let uri = format!("/api/post/{}", post_id);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "success");

    let (status, _) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn link_posts_expose_url_key() {
    let app = test_app();
    let alice = register(&app, "alice").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/posts",
        Some(&alice),
        Some(json!({
            "type": "link",
            "category": "news",
            "title": "a link",
            "url": "https://example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["url"], "https://example.com");
    assert!(body.get("text").is_none());
}

#[tokio::test]
async fn unknown_vote_action_is_rejected() {
    let app = test_app();
    let alice = register(&app, "alice").await;
    let post_id = create_post(&app, &alice).await;

    let uri = format!("/api/post/{}/sideways", post_id);
    let (status, _) = send(&app, Method::GET, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vote_on_unknown_post_is_bad_request() {
    let app = test_app();
    let alice = register(&app, "alice").await;

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/post/no-such-post/upvote",
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
