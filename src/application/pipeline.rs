//! Synthesis Pipeline - 合成管线
//!
//! 固定顺序：模型合成 → 前置静音填充 → 打包返回。
//! 不重采样、不混音、不压缩；填充块与语音帧共用同一格式参数。

use tracing::debug;

use crate::application::ports::{SynthesisError, SynthesizerPort};
use crate::domain::audio::AudioBuffer;

/// 合成管线
///
/// 无跨请求共享状态，可被任意多个请求并发调用。
#[derive(Debug, Clone, Copy)]
pub struct SynthesisPipeline {
    silence_padding_secs: f64,
}

impl SynthesisPipeline {
    pub fn new(silence_padding_secs: f64) -> Self {
        Self {
            silence_padding_secs,
        }
    }

    /// 执行合成并应用静音填充
    ///
    /// 模型调用失败原样上浮为 `SynthesisError`，不重试。
    pub async fn run(
        &self,
        synthesizer: &dyn SynthesizerPort,
        text: &str,
    ) -> Result<AudioBuffer, SynthesisError> {
        let mut buffer = synthesizer.synthesize(text).await?;

        if self.silence_padding_secs > 0.0 {
            let before = buffer.frame_count();
            buffer.prepend_silence(self.silence_padding_secs);
            debug!(
                padding_secs = self.silence_padding_secs,
                frames_before = before,
                frames_after = buffer.frame_count(),
                "Applied silence lead-in"
            );
        }

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::tts::FakeSynthesizer;

    #[tokio::test]
    async fn test_pipeline_prepends_configured_silence() {
        // 22050 Hz 单声道 16-bit，50 帧语音
        let synth = FakeSynthesizer::with_pcm(22_050, 2, 1, vec![1u8; 100]);
        let pipeline = SynthesisPipeline::new(0.2);

        let buffer = pipeline.run(&synth, "Hello world").await.unwrap();

        // round(22050 * 0.2) = 4410 帧前置静音
        assert_eq!(buffer.frame_count(), 4_410 + 50);
        let silence_bytes = 4_410 * 2;
        assert!(buffer.frames()[..silence_bytes].iter().all(|b| *b == 0));
        assert_eq!(&buffer.frames()[silence_bytes..], &[1u8; 100]);
    }

    #[tokio::test]
    async fn test_pipeline_zero_padding_is_passthrough() {
        let synth = FakeSynthesizer::with_pcm(16_000, 2, 1, vec![9u8; 64]);
        let pipeline = SynthesisPipeline::new(0.0);

        let buffer = pipeline.run(&synth, "hi").await.unwrap();
        assert_eq!(buffer.frames(), &[9u8; 64]);
    }

    #[tokio::test]
    async fn test_pipeline_surfaces_engine_failure() {
        let synth = FakeSynthesizer::failing("model exploded");
        let pipeline = SynthesisPipeline::new(0.2);

        let err = pipeline.run(&synth, "hi").await.unwrap_err();
        assert!(matches!(err, SynthesisError::EngineFailed { .. }));
    }
}
