//! Status Handler
//!
//! 健康检查端点：已加载模型数量与名称、默认音色、端点调用形态

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{EndpointsResponse, StatusResponse};
use crate::infrastructure::http::state::AppState;

/// 健康检查与服务状态
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let view = state.status_handler.handle();

    Json(StatusResponse {
        service: "Voice Bridge",
        status: "running",
        models_loaded: view.models_loaded,
        available_voices: view.available_voices,
        default_voice: view.default_voice,
        endpoints: EndpointsResponse {
            speak: "/speak?text=your+message&voice=amy",
            play: "/play?text=your+message&voice=danny",
            voices: "/voices",
        },
    })
}
