// Integration tests for Lume Compat

use actix_web::{test, web, App};
use lume_compat::config::RemoteSettings;
use lume_compat::core::{summary::generate_summary, LocalPredictor, Predictor};
use lume_compat::models::{PredictionResult, PredictionSource, Profile};
use lume_compat::routes::{self, predict::AppState};
use lume_compat::services::{PredictError, RemotePredictor};
use chrono::NaiveDate;
use mockito::{Matcher, Server};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;

fn alice() -> Profile {
    Profile::new("Alice", "F", NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
        .with_hobbies(["reading", "hiking"])
}

fn bob() -> Profile {
    Profile::new("Bob", "M", NaiveDate::from_ymd_opt(1991, 5, 20).unwrap())
        .with_hobbies(["hiking", "gaming"])
}

fn remote_settings(endpoint: &str, api_key: Option<&str>) -> RemoteSettings {
    RemoteSettings {
        endpoint: endpoint.to_string(),
        api_key: api_key.map(str::to_string),
        timeout_secs: 5,
        ..RemoteSettings::default()
    }
}

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

const ASSESSMENT: &str = r#"{"score": 82, "details": {"personality": 80, "hobbies": 75, "lifestyle": 85, "zodiac": 90, "longTerm": 78}, "summary": "A promising pair."}"#;

fn all_summaries(name1: &str, name2: &str) -> Vec<String> {
    [95u8, 85, 75, 65, 55, 10]
        .iter()
        .map(|s| generate_summary(*s, name1, name2))
        .collect()
}

#[tokio::test]
async fn test_missing_credential_never_calls_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let remote = RemotePredictor::new(&remote_settings(&server.url(), None)).unwrap();
    let err = remote.predict(&alice(), &bob()).await.unwrap_err();

    assert!(matches!(err, PredictError::MissingCredential));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_remote_request_shape_and_parse() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "deepseek-chat",
            "temperature": 0.7,
            "max_tokens": 1000
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&format!("Here is my analysis:\n```json\n{}\n```", ASSESSMENT)))
        .expect(1)
        .create_async()
        .await;

    let remote = RemotePredictor::new(&remote_settings(&server.url(), Some("sk-test"))).unwrap();
    let result = remote.predict(&alice(), &bob()).await.unwrap();

    assert_eq!(result.score, 82);
    assert_eq!(result.details.long_term, 78);
    assert_eq!(result.summary, "A promising pair.");
    assert_eq!(result.source, PredictionSource::Remote);
    assert_eq!(result.person1.name, "Alice");
    assert_eq!(result.person2.name, "Bob");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_remote_sends_system_and_user_messages() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#""role":"system""#.to_string()),
            Matcher::Regex(r#""role":"user""#.to_string()),
            Matcher::Regex("Alice".to_string()),
            Matcher::Regex("1991-05-20".to_string()),
        ]))
        .with_status(200)
        .with_body(completion_body(ASSESSMENT))
        .create_async()
        .await;

    let remote = RemotePredictor::new(&remote_settings(&server.url(), Some("sk-test"))).unwrap();
    assert!(remote.predict(&alice(), &bob()).await.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fenced_block_preferred_over_bare_object() {
    let mut server = Server::new_async().await;
    let content = format!(
        "Draft: {{\"score\": 10}}\n```json\n{}\n```\nDone.",
        ASSESSMENT
    );
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(completion_body(&content))
        .create_async()
        .await;

    let remote = RemotePredictor::new(&remote_settings(&server.url(), Some("sk-test"))).unwrap();
    let result = remote.predict(&alice(), &bob()).await.unwrap();

    assert_eq!(result.score, 82);
}

#[tokio::test]
async fn test_non_success_status_fails_without_parsing() {
    let mut server = Server::new_async().await;
    // A valid assessment in the body must still be ignored
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body(completion_body(ASSESSMENT))
        .create_async()
        .await;

    let remote = RemotePredictor::new(&remote_settings(&server.url(), Some("sk-bad"))).unwrap();
    let err = remote.predict(&alice(), &bob()).await.unwrap_err();

    match err {
        PredictError::RemoteRequestFailed { status, status_text } => {
            assert_eq!(status, 401);
            assert_eq!(status_text, "Unauthorized");
        }
        other => panic!("expected RemoteRequestFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reply_without_json_is_unparseable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(completion_body("I cannot help with that."))
        .create_async()
        .await;

    let remote = RemotePredictor::new(&remote_settings(&server.url(), Some("sk-test"))).unwrap();
    let err = remote.predict(&alice(), &bob()).await.unwrap_err();

    assert!(matches!(err, PredictError::UnparseableResponse(_)));
}

#[tokio::test]
async fn test_malformed_completion_body_is_unparseable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let remote = RemotePredictor::new(&remote_settings(&server.url(), Some("sk-test"))).unwrap();
    let err = remote.predict(&alice(), &bob()).await.unwrap_err();

    assert!(matches!(err, PredictError::UnparseableResponse(_)));
}

#[tokio::test]
async fn test_network_error_reported() {
    // Nothing listens on port 9 locally
    let remote = RemotePredictor::new(&remote_settings("http://127.0.0.1:9", Some("sk-test"))).unwrap();
    let err = remote.predict(&alice(), &bob()).await.unwrap_err();

    assert!(matches!(err, PredictError::Network(_)));
}

#[tokio::test]
async fn test_end_to_end_without_credential_uses_fallback() {
    let remote = RemotePredictor::new(&RemoteSettings::default()).unwrap();
    let predictor = Predictor::new(remote, LocalPredictor::with_default_weights());
    let mut rng = StdRng::seed_from_u64(17);

    let result = predictor.predict_with_rng(alice(), bob(), &mut rng).await;

    assert_eq!(result.source, PredictionSource::Local);
    assert!(result.score <= 100);
    assert!(result.details.as_array().iter().all(|s| *s <= 100));
    assert!(!result.summary.is_empty());
    assert!(result.summary.contains("Alice") && result.summary.contains("Bob"));
    assert!(all_summaries("Alice", "Bob").contains(&result.summary));
}

#[tokio::test]
async fn test_server_error_falls_back_to_local() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .create_async()
        .await;

    let remote = RemotePredictor::new(&remote_settings(&server.url(), Some("sk-test"))).unwrap();
    let predictor = Predictor::new(remote, LocalPredictor::default());

    let result = predictor.predict(alice(), bob()).await;

    assert_eq!(result.source, PredictionSource::Local);
}

#[actix_web::test]
async fn test_http_predict_without_credential() {
    let remote = RemotePredictor::new(&RemoteSettings::default()).unwrap();
    let state = AppState {
        predictor: Predictor::new(remote, LocalPredictor::default()),
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(json!({
            "person1": {"name": "Alice", "gender": "F", "birthday": "1990-05-15", "hobbies": ["reading", "hiking"]},
            "person2": {"name": "Bob", "gender": "M", "birthday": "1991-05-20", "hobbies": "hiking, gaming"}
        }))
        .to_request();

    let result: PredictionResult = test::call_and_read_body_json(&app, req).await;

    assert_eq!(result.source, PredictionSource::Local);
    assert_eq!(result.person2.hobbies, vec!["hiking", "gaming"]);
    assert!(result.score <= 100);
}

#[actix_web::test]
async fn test_http_predict_uses_request_credential() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-request")
        .with_status(200)
        .with_body(completion_body(ASSESSMENT))
        .create_async()
        .await;

    let remote = RemotePredictor::new(&remote_settings(&server.url(), None)).unwrap();
    let state = AppState {
        predictor: Predictor::new(remote, LocalPredictor::default()),
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(json!({
            "person1": {"name": "Alice", "birthday": "1990-05-15"},
            "person2": {"name": "Bob", "birthday": "1991-05-20"},
            "apiKey": "sk-request"
        }))
        .to_request();

    let result: PredictionResult = test::call_and_read_body_json(&app, req).await;

    assert_eq!(result.source, PredictionSource::Remote);
    assert_eq!(result.score, 82);
    mock.assert_async().await;
}

#[actix_web::test]
async fn test_http_predict_rejects_empty_name() {
    let remote = RemotePredictor::new(&RemoteSettings::default()).unwrap();
    let state = AppState {
        predictor: Predictor::new(remote, LocalPredictor::default()),
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(json!({
            "person1": {"name": "", "birthday": "1990-05-15"},
            "person2": {"name": "Bob", "birthday": "1991-05-20"}
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_http_health() {
    let remote = RemotePredictor::new(&remote_settings("http://localhost", Some("sk-test"))).unwrap();
    let state = AppState {
        predictor: Predictor::new(remote, LocalPredictor::default()),
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["remoteConfigured"], true);
}

#[actix_web::test]
async fn test_http_predict_rejects_blank_name() {
    let remote = RemotePredictor::new(&RemoteSettings::default()).unwrap();
    let state = AppState {
        predictor: Predictor::new(remote, LocalPredictor::default()),
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(json!({
            "person1": {"name": "Alice", "birthday": "1990-05-15"},
            "person2": {"name": "   ", "birthday": "1991-05-20"}
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_http_predict_truncated_body_returns_json_error() {
    let remote = RemotePredictor::new(&RemoteSettings::default()).unwrap();
    let state = AppState {
        predictor: Predictor::new(remote, LocalPredictor::default()),
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(routes::json_config())
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .insert_header(actix_web::http::header::ContentType::json())
        .set_payload(r#"{"person1": "#)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
    assert_eq!(body["status_code"], 400);
}
