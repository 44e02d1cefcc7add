use axum::body::Body;
use axum::http::{Request, StatusCode};
use member_registry::api::handlers::AppState;
use member_registry::api::router::create_router;
use member_registry::api::types::{ErrorResponse, MemberResponse};
use member_registry::context::AppContext;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

/// 新しいインメモリコンテキスト上のルーターを作成
fn setup_e2e_app() -> axum::Router {
    let context = AppContext::in_memory();
    let app_state = Arc::new(AppState {
        service_deps: context.service_deps().clone(),
    });
    create_router(app_state)
}

fn post_member(name: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/members")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "name": name }).to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// ============================================================================
// E2Eテスト: 正常系フロー
// ============================================================================

#[tokio::test]
async fn test_e2e_health_check() {
    let app = setup_e2e_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_e2e_join_and_fetch_member() {
    let app = setup_e2e_app();

    // Step 1: POST /members
    let response = app.clone().oneshot(post_member("spring")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: MemberResponse = read_json(response).await;
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "spring");

    // Step 2: GET /members/:id
    let response = app
        .clone()
        .oneshot(get(&format!("/members/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: MemberResponse = read_json(response).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_e2e_list_members() {
    let app = setup_e2e_app();

    for name in ["spring1", "spring2"] {
        let response = app.clone().oneshot(post_member(name)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/members")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let members: Vec<MemberResponse> = read_json(response).await;
    let mut names: Vec<_> = members.into_iter().map(|m| m.name).collect();
    names.sort();
    assert_eq!(names, vec!["spring1", "spring2"]);
}

#[tokio::test]
async fn test_e2e_name_is_trimmed() {
    let app = setup_e2e_app();

    let response = app.oneshot(post_member("  spring  ")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: MemberResponse = read_json(response).await;
    assert_eq!(created.name, "spring");
}

// ============================================================================
// E2Eテスト: 異常系
// ============================================================================

#[tokio::test]
async fn test_e2e_duplicate_name_conflict() {
    let app = setup_e2e_app();

    let response = app.clone().oneshot(post_member("spring")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.clone().oneshot(post_member("spring")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "DUPLICATE_MEMBER_NAME");
    assert_eq!(error.message, "Member already exists");

    // 最初の会員のみ保存されている
    let response = app.oneshot(get("/members")).await.unwrap();
    let members: Vec<MemberResponse> = read_json(response).await;
    assert_eq!(members.len(), 1);
}

#[tokio::test]
async fn test_e2e_blank_name_rejected() {
    let app = setup_e2e_app();

    let response = app.oneshot(post_member("   ")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_MEMBER_NAME");
}

#[tokio::test]
async fn test_e2e_unknown_member_not_found() {
    let app = setup_e2e_app();

    let response = app.oneshot(get("/members/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "MEMBER_NOT_FOUND");
}

#[tokio::test]
async fn test_e2e_nul_in_name_rejected() {
    let app = setup_e2e_app();

    let response = app.clone().oneshot(post_member("spr\0ing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_MEMBER_NAME");

    let response = app.oneshot(get("/members")).await.unwrap();
    let members: Vec<MemberResponse> = read_json(response).await;
    assert!(members.is_empty());
}

#[tokio::test]
async fn test_e2e_missing_name_field_returns_json_error() {
    let app = setup_e2e_app();

    let request = Request::builder()
        .method("POST")
        .uri("/members")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_REQUEST_BODY");
    assert!(error.message.contains("name"));
}

#[tokio::test]
async fn test_e2e_malformed_json_returns_json_error() {
    let app = setup_e2e_app();

    let request = Request::builder()
        .method("POST")
        .uri("/members")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn test_e2e_non_numeric_id_returns_json_error() {
    let app = setup_e2e_app();

    let response = app.oneshot(get("/members/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_PATH");
}
