//! Synthesizer Port - 语音合成引擎抽象
//!
//! 一个实例绑定一个已加载的音色模型；具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::audio::AudioBuffer;

/// 合成错误
///
/// 全部上浮为 SynthesisFailed 信号，绝不自动重试
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("synthesis engine failed: {detail}")]
    EngineFailed { detail: String },

    #[error("invalid engine output: {0}")]
    InvalidOutput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Synthesizer Port
///
/// 文本原样传入，不做校验（非空由上游保证）；病态输入的行为
/// 由底层模型决定。格式参数（采样率/位宽/声道）在首次合成后才可知。
#[async_trait]
pub trait SynthesizerPort: Send + Sync {
    /// 将文本合成为原始 PCM 波形
    async fn synthesize(&self, text: &str) -> Result<AudioBuffer, SynthesisError>;

    /// 模型文件路径（用于日志与诊断）
    fn model_path(&self) -> &Path;
}
