use serde::{Deserialize, Serialize};

use crate::domain::{Member, commands::JoinMember};

/// 会員登録リクエスト（POST /members）
#[derive(Debug, Deserialize)]
pub struct JoinMemberRequest {
    pub name: String,
}

impl JoinMemberRequest {
    pub fn to_command(self) -> JoinMember {
        JoinMember::new(self.name)
    }
}

/// 会員レスポンス（POST /members, GET /members, GET /members/:id）
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.value(),
            name: member.name.into_inner(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
