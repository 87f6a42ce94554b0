//! Voice Context - Errors

use thiserror::Error;

/// 音色解析错误
///
/// `Unavailable` 表示注册表为空（服务级故障），比单个名称缺失更严重；
/// `NotFound` 携带当前可用名称列表，便于调用方自行纠正。
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("no voice models loaded")]
    Unavailable,

    #[error("voice '{requested}' not available, choose from: {available:?}")]
    NotFound {
        requested: String,
        available: Vec<String>,
    },
}
