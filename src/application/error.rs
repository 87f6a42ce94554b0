//! 应用层错误定义
//!
//! 统一的命令/查询错误类型；每个失败种类在 HTTP 层映射为
//! 可区分的响应信号，除启动期逐音色加载失败外不吞错。

use thiserror::Error;

use crate::application::ports::{PlaybackError, SynthesisError};
use crate::domain::voice::VoiceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 音色解析失败（Unavailable / NotFound）
    #[error(transparent)]
    Voice(#[from] VoiceError),

    /// 合成失败（携带底层原因，不重试）
    #[error("TTS generation failed: {0}")]
    Synthesis(#[from] SynthesisError),

    /// 播放失败（NoBackend / Failed / Timeout）
    #[error(transparent)]
    Playback(#[from] PlaybackError),

    /// 临时制品读写失败
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
