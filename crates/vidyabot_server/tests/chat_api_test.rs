//! Endpoint tests for the chat proxy router.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use vidyabot_core::{ChatReply, Source, Turn};
use vidyabot_error::{GeminiError, GeminiErrorKind};
use vidyabot_interface::ChatModel;
use vidyabot_server::{AppState, Environment, ServerConfig, router};

/// Mock model recording each invocation and replaying a canned outcome.
struct MockModel {
    calls: Mutex<Vec<(Vec<Turn>, String)>>,
    outcome: MockOutcome,
}

enum MockOutcome {
    Success(ChatReply),
    Error(GeminiErrorKind),
}

impl MockModel {
    fn success(reply: ChatReply) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            outcome: MockOutcome::Success(reply),
        })
    }

    fn error(kind: GeminiErrorKind) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            outcome: MockOutcome::Error(kind),
        })
    }
}

#[async_trait]
impl ChatModel for MockModel {
    async fn reply(&self, history: &[Turn], message: &str) -> Result<ChatReply, GeminiError> {
        self.calls
            .lock()
            .unwrap()
            .push((history.to_vec(), message.to_string()));
        match &self.outcome {
            MockOutcome::Success(reply) => Ok(reply.clone()),
            MockOutcome::Error(kind) => Err(GeminiError::new(kind.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "mock-gemini"
    }
}

fn config(environment: Environment) -> ServerConfig {
    ServerConfig {
        api_key: "test-key".to_string(),
        port: 3000,
        environment,
        model: "mock-gemini".to_string(),
        allowed_origins: Vec::new(),
        static_dir: PathBuf::from("public"),
    }
}

fn app(model: Arc<MockModel>, environment: Environment) -> axum::Router {
    router(AppState::new(model, Arc::new(config(environment))))
}

fn chat_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_chat_happy_path_returns_text_and_sources() {
    let model = MockModel::success(ChatReply {
        text: "Admissions open in spring.".to_string(),
        sources: vec![Source {
            uri: "https://www.vidyamandir.org".to_string(),
            title: "Vidya Mandir".to_string(),
        }],
    });
    let app = app(model.clone(), Environment::Development);

    let response = app
        .oneshot(chat_request(json!({
            "message": "Admissions",
            "history": [
                {"id": "init", "text": "Hello! How can I help you today?", "sender": "bot"},
                {"id": "1", "text": "Admissions", "sender": "user"}
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["text"], "Admissions open in spring.");
    assert_eq!(body["sources"][0]["uri"], "https://www.vidyamandir.org");

    // The greeting-only history translates to no turns; the invoker gets the
    // new message on its own.
    let calls = model.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].0.is_empty());
    assert_eq!(calls[0].1, "Admissions");
}

#[tokio::test]
async fn test_interior_history_is_forwarded_upstream() {
    let model = MockModel::success(ChatReply {
        text: "ok".to_string(),
        sources: Vec::new(),
    });
    let app = app(model.clone(), Environment::Development);

    let response = app
        .oneshot(chat_request(json!({
            "message": "And fees?",
            "history": [
                {"id": "init", "text": "Hello!", "sender": "bot"},
                {"id": "1", "text": "What programs do you offer?", "sender": "user"},
                {"id": "2", "text": "We offer CBSE programs.", "sender": "bot"},
                {"id": "3", "text": "And fees?", "sender": "user"}
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let calls = model.calls.lock().unwrap();
    assert_eq!(calls[0].0.len(), 2);
    assert_eq!(calls[0].0[0].text, "What programs do you offer?");
}

#[tokio::test]
async fn test_invalid_message_returns_400() {
    // (body, echoed type, echoed length when the value was a string)
    let cases = [
        (json!({"message": "", "history": []}), "string", Some(0)),
        (json!({"message": "   ", "history": []}), "string", Some(3)),
        (json!({"message": null, "history": []}), "null", None),
        (json!({"history": []}), "null", None),
        (json!({"message": 42, "history": []}), "number", None),
    ];
    for (body, expected_type, expected_len) in cases {
        let model = MockModel::success(ChatReply {
            text: "never".to_string(),
            sources: Vec::new(),
        });
        let app = app(model.clone(), Environment::Development);

        let response = app.oneshot(chat_request(body.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = body_json(response).await;
        assert!(
            json["error"].as_str().unwrap().contains("message"),
            "body: {body}"
        );
        assert_eq!(json["received"]["type"], expected_type, "body: {body}");
        match expected_len {
            Some(len) => assert_eq!(json["received"]["length"], len, "body: {body}"),
            None => assert!(json["received"].get("length").is_none(), "body: {body}"),
        }
        assert!(model.calls.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_non_array_history_returns_400() {
    for history in [json!("oops"), json!({"a": 1}), json!(null), json!(7)] {
        let model = MockModel::success(ChatReply {
            text: "never".to_string(),
            sources: Vec::new(),
        });
        let app = app(model.clone(), Environment::Development);

        let response = app
            .oneshot(chat_request(json!({"message": "hi", "history": history})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("history"));
        assert!(json.get("received").is_some());
    }
}

#[tokio::test]
async fn test_quota_error_returns_429_without_details() {
    let model = MockModel::error(GeminiErrorKind::QuotaExhausted("quota exceeded".to_string()));
    let app = app(model, Environment::Development);

    let response = app
        .oneshot(chat_request(json!({"message": "hi", "history": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("try again"));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_authentication_error_is_generic_500() {
    let model = MockModel::error(GeminiErrorKind::Authentication(
        "API key not valid. Please pass a valid API key.".to_string(),
    ));
    let app = app(model, Environment::Development);

    let response = app
        .oneshot(chat_request(json!({"message": "hi", "history": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("contact support"));
    // Key-related detail must never reach the caller, even in development.
    assert!(!serde_json::to_string(&body).unwrap().contains("API key"));
}

#[tokio::test]
async fn test_upstream_error_details_only_in_development() {
    let kind = GeminiErrorKind::HttpStatus {
        status_code: 503,
        message: "Service Unavailable".to_string(),
    };

    let response = app(MockModel::error(kind.clone()), Environment::Development)
        .oneshot(chat_request(json!({"message": "hi", "history": []})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["details"].as_str().unwrap().contains("503"));

    let response = app(MockModel::error(kind), Environment::Production)
        .oneshot(chat_request(json!({"message": "hi", "history": []})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_health_reports_configuration() {
    let model = MockModel::success(ChatReply {
        text: "unused".to_string(),
        sources: Vec::new(),
    });
    let app = app(model, Environment::Development);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["apiKeyConfigured"], true);
    assert_eq!(body["environment"], "development");
    assert_eq!(body["port"], 3000);
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn test_unexpected_error_renders_generic_500() {
    use axum::response::IntoResponse;
    use vidyabot_server::ApiError;

    let response = ApiError::unexpected("stack trace here", false).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("unexpected"));
    assert!(body.get("details").is_none());

    let response = ApiError::unexpected("stack trace here", true).into_response();
    let body = body_json(response).await;
    assert_eq!(body["details"], "stack trace here");
}

#[tokio::test]
async fn test_unknown_api_path_returns_json_404() {
    let model = MockModel::success(ChatReply {
        text: "unused".to_string(),
        sources: Vec::new(),
    });
    let app = app(model, Environment::Development);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "API endpoint not found");
}
