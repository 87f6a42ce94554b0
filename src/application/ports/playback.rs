//! Playback Port - 本地音频输出抽象
//!
//! 每次请求调用一次，不重试，不跨请求排队

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// 播放错误
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// 主机上找不到任何已知播放程序；调用方不得再尝试播放
    #[error("no audio player available, install pulseaudio-utils, alsa-utils, sox, or ffmpeg")]
    NoBackend,

    /// 播放进程非零退出；detail 为捕获的 stderr（若有）
    #[error("audio playback failed: {detail}")]
    Failed { detail: String },

    /// 播放进程超出时限；视为失败，不保证部分播放
    #[error("audio playback timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 播放结果（实际使用的后端名称）
#[derive(Debug, Clone)]
pub struct PlaybackReport {
    pub backend: String,
}

/// Playback Port
#[async_trait]
pub trait PlaybackPort: Send + Sync {
    /// 通过本地输出设备播放 WAV 文件
    async fn play(&self, wav_path: &Path) -> Result<PlaybackReport, PlaybackError>;
}
