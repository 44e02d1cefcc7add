use crate::domain::{Member, MemberId, MemberName, NewMember};
use async_trait::async_trait;
use thiserror::Error;

/// 会員リポジトリのエラー
#[derive(Debug, Error)]
pub enum MemberRepositoryError {
    /// ストレージの一意制約により名前が重複した
    ///
    /// サービス層の重複チェックを同時登録がすり抜けた場合にのみ発生する。
    #[error("Member name already stored: {0}")]
    DuplicateName(MemberName),

    /// その他のストレージ障害
    #[error("Member storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl MemberRepositoryError {
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, MemberRepositoryError>;

/// 会員リポジトリポート
///
/// 会員サービスが利用するストレージの抽象。
/// 保存時のID採番は実装の責務。名前の一意性の強制は必須ではない。
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 新しい会員を保存し、採番済みの会員を返す
    async fn save(&self, member: NewMember) -> Result<Member>;

    /// IDで会員を取得する
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>>;

    /// 名前で会員を取得する
    ///
    /// 登録前の重複チェックに使用される。
    async fn find_by_name(&self, name: &MemberName) -> Result<Option<Member>>;

    /// 全会員を取得する（順序は実装依存）
    async fn find_all(&self) -> Result<Vec<Member>>;
}
