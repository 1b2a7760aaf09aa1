//! todo-api バイナリのエントリポイント
//! HTTP サーバを起動します。

use todo_api::{app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // ロガー設定（RUST_LOG 環境変数で制御可能）
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    tracing::info!(%addr, "server starting");

    let router = app();
    axum::serve(listener, router).await.expect("server error");
}
