use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use contacts::{db::schema, server, state::AppState};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// A router over a fresh in-memory store, plus handles to seed it directly.
pub struct TestContext {
    pub router: Router,
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();

        let state = AppState::new(schema::test_connection());
        Self {
            router: server::app(state.clone()),
            state,
        }
    }

    pub async fn send(&self, method: &str, route: &str, body: Option<String>) -> Response {
        let builder = Request::builder().uri(route).method(method);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, route: &str) -> Response {
        self.send("GET", route, None).await
    }

    pub async fn post_json(&self, route: &str, payload: serde_json::Value) -> Response {
        self.send("POST", route, Some(payload.to_string())).await
    }

    pub async fn put_json(&self, route: &str, payload: serde_json::Value) -> Response {
        self.send("PUT", route, Some(payload.to_string())).await
    }

    pub async fn delete(&self, route: &str) -> Response {
        self.send("DELETE", route, None).await
    }
}

pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}
