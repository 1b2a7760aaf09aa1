//! Todo CRUD HTTP API（axum）
//!
//! 3 つのエンドポイントを提供する薄いハンドラ層です。
//! - `GET /todo/{id}`
//! - `DELETE /todo/{id}`
//! - `POST /todo`
//!
//! ストレージは `TodoStore` トレイト経由で注入します。

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

mod config;
mod error;
mod handlers;
mod store;

pub use config::Config;
pub use error::ApiError;
pub use store::{MemoryTodoStore, StoreError, TodoStore};

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: Arc::new(MemoryTodoStore::default()),
        }
    }
}

/// ルータを構築して返します。
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// 外部から状態を注入できる版
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/todo", post(handlers::post_todo))
        .route(
            "/todo/:id",
            get(handlers::get_todo).delete(handlers::delete_todo),
        )
        .with_state(state)
}
