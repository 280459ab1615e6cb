//! HTTP-level tests driving the real router in-process against a seeded in-memory database.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod api;

/// Router wired to a test database, dispatching requests without binding a socket.
pub struct TestApp {
    context: TestContext,
    router: Router,
}

impl TestApp {
    /// Creates an app over the full review schema loaded with the canonical seed data.
    pub async fn seeded() -> Self {
        let context = TestBuilder::new()
            .with_review_tables()
            .with_seed_data()
            .build()
            .await
            .unwrap();

        Self::from_context(context)
    }

    /// Creates an app over an already built test context.
    pub fn from_context(context: TestContext) -> Self {
        let db = context.db.clone().unwrap();
        let router = router().with_state(AppState::new(db));

        Self { context, router }
    }

    pub fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Sends a raw body as JSON so malformed payloads can be exercised too.
    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_raw(method, uri, &body.to_string()).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }
}

/// Asserts a response is an error with the given status and `{msg}` body.
pub fn assert_error(response: (StatusCode, Value), status: StatusCode, msg: &str) {
    assert_eq!(response.0, status);
    assert_eq!(response.1, json!({ "msg": msg }));
}
