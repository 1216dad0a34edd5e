use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use app::config::Config;
use app::core::issuer::issue_otp;
use app::utils::jwt::encode_data;
use models::schemas::lab::LabSessionSchema;
use sea_orm::DatabaseConnection;
use utils::testing::{setup_test_db, setup_test_env};

const OWNER: &str = "owner@example.com";
const VISITOR: &str = "user@example.com";
const ORIGIN: &str = "http://localhost:5173";

async fn test_app() -> (Router, DatabaseConnection) {
    setup_test_env();
    let config = Config::from_env();
    let conn = setup_test_db("sqlite::memory:")
        .await
        .expect("Set up db failed!");
    (api::setup_router(config, conn.clone()), conn)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn verify_with_missing_fields_is_rejected() {
    let (router, _conn) = test_app().await;

    // Absent fields fail deserialization.
    let response = router
        .clone()
        .oneshot(post_json("/otp/verify", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Present-but-empty fields fail validation.
    let response = router
        .oneshot(post_json("/otp/verify", json!({ "email": "", "otp": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn send_with_empty_email_is_rejected() {
    let (router, _conn) = test_app().await;

    let response = router
        .oneshot(post_json("/otp/send", json!({ "email": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn send_delivery_failure_is_an_opaque_server_error() {
    let (router, _conn) = test_app().await;

    // The test environment's SMTP endpoint refuses connections, so issuance
    // persists the code but delivery fails.
    let response = router
        .oneshot(post_json("/otp/send", json!({ "email": VISITOR })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], json!("Something went wrong"));
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let (router, _conn) = test_app().await;

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/otp/verify")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn privileged_verification_returns_session_token() {
    let (router, conn) = test_app().await;
    let (_, code) = issue_otp(&conn, OWNER.to_string()).await.unwrap();

    let response = router
        .clone()
        .oneshot(post_json(
            "/otp/verify",
            json!({ "email": OWNER, "otp": code }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("OTP verified"));
    assert_eq!(body["darkLabAccess"], json!(true));
    let token = body["sessionToken"].as_str().expect("token expected").to_string();

    // The token opens the privileged endpoint.
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/lab/status")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], json!(OWNER));
    assert_eq!(body["darkLabAccess"], json!(true));

    // The code was consumed; replaying it fails.
    let response = router
        .oneshot(post_json(
            "/otp/verify",
            json!({ "email": OWNER, "otp": code }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("Invalid OTP"));
}

#[tokio::test]
async fn unlisted_email_verifies_without_lab_access() {
    let (router, conn) = test_app().await;
    let (_, code) = issue_otp(&conn, VISITOR.to_string()).await.unwrap();

    let response = router
        .oneshot(post_json(
            "/otp/verify",
            json!({ "email": VISITOR, "otp": code }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["darkLabAccess"], json!(false));
    assert!(body.get("sessionToken").is_none());
}

#[tokio::test]
async fn lab_status_requires_valid_token() {
    let (router, _conn) = test_app().await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/lab/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/lab/status")
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn lab_status_rejects_unprivileged_token() {
    setup_test_env();
    let config = Config::from_env();
    let (router, _conn) = test_app().await;

    // A validly signed token without lab access gets past authentication
    // but not authorization.
    let token = encode_data(
        &config,
        LabSessionSchema {
            email: VISITOR.to_string(),
            dark_lab_access: false,
        },
    )
    .unwrap();

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/lab/status")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let (router, _conn) = test_app().await;

    let response = router
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/otp/send")
                .header(header::ORIGIN, ORIGIN)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(ORIGIN)
    );
}
