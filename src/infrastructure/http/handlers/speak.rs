//! Speak/Play HTTP Handlers
//!
//! /speak 返回 audio/wav 字节流；/play 本地播放并返回结构化确认。
//! 文本非空在此处校验，其余失败由应用层错误映射统一处理。

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;

use crate::application::{PlayCommand, SpeakCommand};
use crate::infrastructure::http::dto::{ApiResponse, PlayAck, SynthesisParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 校验必填文本参数
fn require_text(params: &SynthesisParams) -> Result<String, ApiError> {
    match params.text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(ApiError::BadRequest(
            "Query parameter 'text' is required and must be non-empty".to_string(),
        )),
    }
}

/// 合成并返回音频文件
pub async fn speak(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SynthesisParams>,
) -> Result<Response, ApiError> {
    let text = require_text(&params)?;

    let result = state
        .speak_handler
        .handle(SpeakCommand {
            text,
            voice: params.voice.clone(),
        })
        .await?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/wav")
        .header(header::CONTENT_LENGTH, result.wav.len())
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"speech.wav\"",
        )
        .body(Body::from(result.wav))
        .unwrap())
}

/// 合成并本地播放
pub async fn play(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SynthesisParams>,
) -> Result<Json<ApiResponse<PlayAck>>, ApiError> {
    let text = require_text(&params)?;

    let result = state
        .play_handler
        .handle(PlayCommand {
            text,
            voice: params.voice.clone(),
        })
        .await?;

    Ok(Json(ApiResponse::success(PlayAck {
        status: "played",
        text: result.text,
        voice: result.voice,
        backend: result.backend,
    })))
}
