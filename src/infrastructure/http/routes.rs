//! HTTP Routes
//!
//! API Endpoints:
//! - /        GET  健康检查与服务状态
//! - /voices  GET  列出已加载音色与描述
//! - /speak   GET  合成并返回 WAV（?text=...&voice=...）
//! - /play    GET  合成并本地播放（?text=...&voice=...）

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::status))
        .route("/voices", get(handlers::list_voices))
        .route("/speak", get(handlers::speak))
        .route("/play", get(handlers::play))
}
