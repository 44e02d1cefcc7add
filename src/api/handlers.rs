use crate::application::member::{
    ServiceDependencies, find_members as execute_find_members, find_one as execute_find_one,
    join as execute_join,
};
use crate::domain::MemberId;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{
    error::ApiError,
    extractors::{ApiJson, ApiPath},
    types::{JoinMemberRequest, MemberResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /members - 会員を登録
///
/// 強制されるビジネスルール:
/// - 会員名が有効であること
/// - 同じ名前の会員が存在しないこと
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<JoinMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let member_id = execute_join(&state.service_deps, req.to_command()).await?;

    // 登録された会員を取得して正規化済みの名前を返す
    let member = execute_find_one(&state.service_deps, member_id)
        .await?
        .ok_or(ApiError::MemberNotFound(member_id))?;

    Ok((StatusCode::CREATED, Json(MemberResponse::from(member))))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /members - 会員一覧を取得
pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = execute_find_members(&state.service_deps).await?;

    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

/// GET /members/:id - 会員詳細を取得
pub async fn get_member(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member_id = MemberId::new(id);

    let member = execute_find_one(&state.service_deps, member_id)
        .await?
        .ok_or(ApiError::MemberNotFound(member_id))?;

    Ok(Json(MemberResponse::from(member)))
}
