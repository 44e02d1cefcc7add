use crate::application::member::MemberApplicationError;
use crate::domain::MemberId;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと抽出器の拒否をラップし、
/// HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    /// アプリケーション層のエラー
    Application(MemberApplicationError),
    /// 会員が存在しない
    MemberNotFound(MemberId),
    /// リクエストボディが不正
    InvalidBody(JsonRejection),
    /// パスパラメータが不正
    InvalidPath(PathRejection),
}

impl From<MemberApplicationError> for ApiError {
    fn from(err: MemberApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400/415/422 - リクエストの形式不正（ステータスはaxumの判定に従う）
            ApiError::InvalidBody(ref rejection) => {
                (rejection.status(), "INVALID_REQUEST_BODY", rejection.body_text())
            }
            ApiError::InvalidPath(ref rejection) => {
                (StatusCode::BAD_REQUEST, "INVALID_PATH", rejection.body_text())
            }

            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::MemberNotFound(id) => (
                StatusCode::NOT_FOUND,
                "MEMBER_NOT_FOUND",
                format!("Member {} not found", id),
            ),

            // 409 Conflict - 会員名の重複
            ApiError::Application(MemberApplicationError::DuplicateName(_)) => (
                StatusCode::CONFLICT,
                "DUPLICATE_MEMBER_NAME",
                "Member already exists".to_string(),
            ),

            // 422 Unprocessable Entity - 会員名のバリデーション違反
            ApiError::Application(MemberApplicationError::InvalidName(ref e)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_MEMBER_NAME",
                e.to_string(),
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(MemberApplicationError::RepositoryError(ref e)) => {
                tracing::error!("Member repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access member storage".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
