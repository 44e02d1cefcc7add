//! コンポジションルート
//!
//! `AppContext` は起動時にオブジェクトグラフを一度だけ構築し、その背後の
//! リソースを所有する。利用側は `ServiceDependencies` の共有参照を受け取り、
//! グローバル変数は使わない。
//! `start` でリソースを確保し、`shutdown` で解放する。

use crate::adapters::memory::MemoryMemberRepository;
use crate::adapters::postgres::{MIGRATOR, PostgresMemberRepository};
use crate::application::member::ServiceDependencies;
use crate::config::{AppConfig, StorageBackend};
use crate::ports::MemberRepository;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use thiserror::Error;

/// 起動時のエラー
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// データベース接続失敗
    #[error("Failed to connect to database")]
    Connect(#[source] sqlx::Error),

    /// マイグレーション失敗
    #[error("Failed to run database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// 共有されるサービス依存関係と、その背後のリソースを所有する
pub struct AppContext {
    service_deps: ServiceDependencies,
    pool: Option<PgPool>,
}

impl AppContext {
    /// 設定されたストレージバックエンドに応じて全依存関係を構築する
    ///
    /// Postgresの場合、リポジトリを渡す前にプールを接続し、
    /// 未適用のマイグレーションを実行する。
    pub async fn start(config: &AppConfig) -> Result<Self, BootstrapError> {
        match config.storage {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory member store");
                Ok(Self::in_memory())
            }
            StorageBackend::Postgres => {
                tracing::info!(
                    max_connections = config.database.max_connections,
                    "Connecting to PostgreSQL"
                );
                let pool = PgPoolOptions::new()
                    .max_connections(config.database.max_connections)
                    .connect(&config.database.url)
                    .await
                    .map_err(BootstrapError::Connect)?;

                if let Err(e) = MIGRATOR.run(&pool).await {
                    pool.close().await;
                    return Err(BootstrapError::Migrate(e));
                }
                tracing::info!("Database migrations applied");

                Ok(Self::with_pool(pool))
            }
        }
    }

    /// 新しいインメモリストアを使うコンテキスト
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(MemoryMemberRepository::new()))
    }

    /// マイグレーション済みの既存プールを使うコンテキスト
    ///
    /// プールの解放責務はコンテキストに移る。
    pub fn with_pool(pool: PgPool) -> Self {
        let repository = Arc::new(PostgresMemberRepository::new(pool.clone()));
        Self {
            service_deps: ServiceDependencies::new(repository),
            pool: Some(pool),
        }
    }

    /// 呼び出し側が用意したリポジトリを使うコンテキスト（解放対象なし）
    pub fn with_repository(repository: Arc<dyn MemberRepository>) -> Self {
        Self {
            service_deps: ServiceDependencies::new(repository),
            pool: None,
        }
    }

    pub fn service_deps(&self) -> &ServiceDependencies {
        &self.service_deps
    }

    /// 所有するリソースを解放する
    ///
    /// selfを消費するため、以降コンテキストは使用できない。
    pub async fn shutdown(self) {
        if let Some(pool) = self.pool {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
        tracing::info!("Application context shut down");
    }
}
