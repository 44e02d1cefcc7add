pub mod member_repository;

// パブリックに型を再エクスポート
pub use member_repository::MemberRepository as PostgresMemberRepository;

/// `member` テーブルのマイグレーション（コンパイル時に埋め込み）
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
