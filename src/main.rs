use member_registry::{
    api::{handlers::AppState, router::create_router},
    config::AppConfig,
    context::AppContext,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "member_registry=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(storage = ?config.storage, "Starting member registry");

    // リソース確保前にバインドする（失敗時に解放すべきものが残らない）
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // セットアップ：オブジェクトグラフを一度だけ構築
    let context = AppContext::start(&config).await?;

    let app_state = Arc::new(AppState {
        service_deps: context.service_deps().clone(),
    });
    let app = create_router(app_state);

    tracing::info!("Server listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // ティアダウン：サーバーの終了結果に関わらず必ず実行
    context.shutdown().await;

    served?;
    Ok(())
}

/// Ctrl-C（unixではSIGTERMも）で完了する
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
