//! Voices Handler
//!
//! 列出当前已加载的音色、默认音色与各音色的描述信息

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::VoicesResponse;
use crate::infrastructure::http::state::AppState;

/// 查询可用音色列表
pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<VoicesResponse> {
    let view = state.list_voices_handler.handle();

    Json(VoicesResponse {
        available: view.available,
        default: view.default,
        descriptions: view.descriptions,
    })
}
