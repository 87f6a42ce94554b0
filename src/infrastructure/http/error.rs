//! HTTP Error Handling
//!
//! 应用层错误 → 可区分的 HTTP 响应信号：
//! - VoiceUnavailable / NoPlaybackBackend ⇒ 503（两者消息可区分：
//!   后者意味着合成已成功、仅输出失败）
//! - VoiceNotFound ⇒ 400，附可用音色列表
//! - SynthesisFailed / PlaybackFailed / PlaybackTimeout ⇒ 500，附诊断文本

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ports::PlaybackError;
use crate::application::ApplicationError;
use crate::domain::voice::VoiceError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const INTERNAL_ERROR: i32 = 500;
    pub const SERVICE_UNAVAILABLE: i32 = 503;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(errno::BAD_REQUEST, msg.clone()),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno = errno::INTERNAL_ERROR, error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(errno::INTERNAL_ERROR, msg.clone()),
                )
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(errno = errno::SERVICE_UNAVAILABLE, error = %msg, "Service unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(errno::SERVICE_UNAVAILABLE, msg.clone()),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Voice(VoiceError::Unavailable) => {
                ApiError::ServiceUnavailable("No voice models loaded".to_string())
            }
            ApplicationError::Voice(VoiceError::NotFound {
                requested,
                available,
            }) => ApiError::BadRequest(format!(
                "Voice '{}' not available. Choose from: {:?}",
                requested, available
            )),
            ApplicationError::Synthesis(e) => {
                ApiError::Internal(format!("TTS generation failed: {}", e))
            }
            ApplicationError::Playback(PlaybackError::NoBackend) => ApiError::ServiceUnavailable(
                "No audio player available. Install pulseaudio-utils, alsa-utils, sox, or ffmpeg"
                    .to_string(),
            ),
            ApplicationError::Playback(e) => ApiError::Internal(e.to_string()),
            ApplicationError::Io(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_maps_to_503() {
        let api: ApiError = ApplicationError::Voice(VoiceError::Unavailable).into();
        assert!(matches!(api, ApiError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_not_found_lists_alternatives_in_message() {
        let api: ApiError = ApplicationError::Voice(VoiceError::NotFound {
            requested: "danny".to_string(),
            available: vec!["amy".to_string()],
        })
        .into();
        match api {
            ApiError::BadRequest(msg) => {
                assert!(msg.contains("danny"));
                assert!(msg.contains("amy"));
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_no_backend_is_distinct_from_synthesis_failure() {
        let api: ApiError = ApplicationError::Playback(PlaybackError::NoBackend).into();
        match api {
            ApiError::ServiceUnavailable(msg) => assert!(msg.contains("audio player")),
            other => panic!("expected ServiceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_playback_timeout_maps_to_internal_with_diagnostic() {
        let api: ApiError =
            ApplicationError::Playback(PlaybackError::Timeout { secs: 30 }).into();
        match api {
            ApiError::Internal(msg) => assert!(msg.contains("timed out")),
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
