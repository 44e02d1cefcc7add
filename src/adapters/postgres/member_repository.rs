use crate::domain::{Member, MemberId, MemberName, NewMember};
use crate::ports::member_repository::{
    MemberRepository as MemberRepositoryTrait, MemberRepositoryError, Result,
};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをMemberに変換する
///
/// 保存済みの名前も `MemberName` のバリデーションを通す。
/// アプリケーション外で書き込まれた不正な行はストレージエラーとして扱う。
fn map_row_to_member(row: &PgRow) -> Result<Member> {
    let id: i64 = row.try_get("id").map_err(MemberRepositoryError::storage)?;
    let name: String = row.try_get("name").map_err(MemberRepositoryError::storage)?;
    let name = MemberName::parse(name).map_err(MemberRepositoryError::storage)?;

    Ok(Member {
        id: MemberId::new(id),
        name,
    })
}

/// MemberRepositoryのPostgreSQL実装
///
/// `migrations/` で作成される `member` テーブルに永続化する。
/// `name` の一意制約違反は `DuplicateName` として返す。
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// PostgreSQLコネクションプールから新しいMemberRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    /// 会員を保存（IDはIDENTITY列で採番）
    async fn save(&self, member: NewMember) -> Result<Member> {
        let row = sqlx::query(
            r#"
            INSERT INTO member (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(member.name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                MemberRepositoryError::DuplicateName(member.name.clone())
            }
            other => MemberRepositoryError::storage(other),
        })?;

        map_row_to_member(&row)
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>> {
        let row = sqlx::query(
            r#"
            SELECT id, name
            FROM member
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(MemberRepositoryError::storage)?;

        row.as_ref().map(map_row_to_member).transpose()
    }

    async fn find_by_name(&self, name: &MemberName) -> Result<Option<Member>> {
        let row = sqlx::query(
            r#"
            SELECT id, name
            FROM member
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(MemberRepositoryError::storage)?;

        row.as_ref().map(map_row_to_member).transpose()
    }

    /// 全会員をID順で取得
    async fn find_all(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM member
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(MemberRepositoryError::storage)?;

        rows.iter().map(map_row_to_member).collect()
    }
}
