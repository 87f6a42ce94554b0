//! Fake Synthesizer - 用于测试的合成器
//!
//! 始终返回固定的 PCM 缓冲，不调用任何外部引擎；
//! 可配置为固定失败以测试错误路径。

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::application::ports::{SynthesisError, SynthesizerPort};
use crate::domain::audio::{AudioBuffer, AudioSpec};

/// Fake Synthesizer
pub struct FakeSynthesizer {
    spec: AudioSpec,
    pcm: Vec<u8>,
    fail_with: Option<String>,
    model_path: PathBuf,
}

impl FakeSynthesizer {
    /// 固定 PCM 输出
    pub fn with_pcm(sample_rate: u32, sample_width: u16, channels: u16, pcm: Vec<u8>) -> Self {
        Self {
            spec: AudioSpec {
                sample_rate,
                sample_width,
                channels,
            },
            pcm,
            fail_with: None,
            model_path: PathBuf::from("/dev/null"),
        }
    }

    /// 22050 Hz 单声道 16-bit 的短促方波
    pub fn beep() -> Self {
        let mut pcm = Vec::with_capacity(441 * 2);
        for i in 0..441u32 {
            let sample: i16 = if (i / 50) % 2 == 0 { 8_000 } else { -8_000 };
            pcm.extend_from_slice(&sample.to_le_bytes());
        }
        Self::with_pcm(22_050, 2, 1, pcm)
    }

    /// 始终以 EngineFailed 失败
    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            spec: AudioSpec {
                sample_rate: 22_050,
                sample_width: 2,
                channels: 1,
            },
            pcm: Vec::new(),
            fail_with: Some(detail.into()),
            model_path: PathBuf::from("/dev/null"),
        }
    }
}

#[async_trait]
impl SynthesizerPort for FakeSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<AudioBuffer, SynthesisError> {
        if let Some(detail) = &self.fail_with {
            return Err(SynthesisError::EngineFailed {
                detail: detail.clone(),
            });
        }
        Ok(AudioBuffer::new(self.spec, self.pcm.clone()))
    }

    fn model_path(&self) -> &Path {
        &self.model_path
    }
}
