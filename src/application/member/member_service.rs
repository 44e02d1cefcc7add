use crate::domain::{Member, MemberId, MemberName, NewMember, commands::JoinMember};
use crate::ports::{MemberRepository, MemberRepositoryError};
use std::sync::Arc;

use super::errors::{MemberApplicationError, Result};

/// サービスの依存関係
///
/// コンポジションルートで一度だけ構築され、参照として共有される。
/// 以下のサービス操作はこれを引数として受け取る純粋な関数。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub member_repository: Arc<dyn MemberRepository>,
}

impl ServiceDependencies {
    pub fn new(member_repository: Arc<dyn MemberRepository>) -> Self {
        Self { member_repository }
    }
}

/// 会員を登録する
///
/// ビジネスルール：
/// - 会員名が有効であること（空白のみ・制御文字・文字数超過は不可）
/// - 同じ名前の会員が存在しないこと
///
/// # 一貫性
///
/// 重複チェックと保存は別々のリポジトリ呼び出しであり、アトミックではない。
/// 同名の同時登録がチェックをすり抜けた場合、バックエンドに一意制約があれば
/// その違反は同じ `DuplicateName` エラーとして返る。
///
/// # 戻り値
/// リポジトリが採番した会員ID
#[tracing::instrument(skip(deps))]
pub async fn join(deps: &ServiceDependencies, cmd: JoinMember) -> Result<MemberId> {
    // 1. 会員名のバリデーション
    let name = MemberName::parse(&cmd.name)?;

    // 2. 重複チェック
    let existing = deps
        .member_repository
        .find_by_name(&name)
        .await
        .map_err(MemberApplicationError::from)?;

    if existing.is_some() {
        tracing::warn!("member name already registered");
        return Err(MemberApplicationError::DuplicateName(name));
    }

    // 3. 保存
    let member = deps
        .member_repository
        .save(NewMember::new(name))
        .await
        .map_err(|e| {
            if let MemberRepositoryError::DuplicateName(_) = e {
                tracing::warn!("member name taken by a concurrent join");
            }
            MemberApplicationError::from(e)
        })?;

    tracing::info!(member_id = %member.id, "member joined");
    Ok(member.id)
}

/// IDで会員を取得する
#[tracing::instrument(skip(deps))]
pub async fn find_one(deps: &ServiceDependencies, id: MemberId) -> Result<Option<Member>> {
    Ok(deps.member_repository.find_by_id(id).await?)
}

/// 全会員を取得する（順序は保証しない）
#[tracing::instrument(skip(deps))]
pub async fn find_members(deps: &ServiceDependencies) -> Result<Vec<Member>> {
    Ok(deps.member_repository.find_all().await?)
}
