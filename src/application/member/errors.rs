use crate::domain::{InvalidMemberName, MemberName};
use crate::ports::MemberRepositoryError;
use thiserror::Error;

/// 会員管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum MemberApplicationError {
    /// 同じ名前の会員が既に存在する
    #[error("Member already exists")]
    DuplicateName(MemberName),

    /// 会員名がドメインのバリデーションに失敗した
    #[error("Invalid member name: {0}")]
    InvalidName(#[from] InvalidMemberName),

    /// MemberRepositoryのエラー
    #[error("Member repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<MemberRepositoryError> for MemberApplicationError {
    fn from(err: MemberRepositoryError) -> Self {
        match err {
            MemberRepositoryError::DuplicateName(name) => Self::DuplicateName(name),
            MemberRepositoryError::Storage(source) => Self::RepositoryError(source),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, MemberApplicationError>;
