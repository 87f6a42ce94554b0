//! Speak/Play Command Handlers
//!
//! 两个命令共用同一前半段：解析音色 → 合成管线。
//! Play 额外落盘一个临时 WAV 交给播放端口，文件在所有退出路径上
//! 随作用域自动清理（成功、失败、超时一视同仁）。

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{PlayCommand, PlayResponse, SpeakCommand, SpeakResponse};
use crate::application::error::ApplicationError;
use crate::application::pipeline::SynthesisPipeline;
use crate::application::ports::PlaybackPort;
use crate::application::registry::VoiceRegistry;

// ============================================================================
// Speak
// ============================================================================

/// Speak Handler - 合成并返回 WAV 字节流
pub struct SpeakHandler {
    registry: Arc<VoiceRegistry>,
    pipeline: SynthesisPipeline,
}

impl SpeakHandler {
    pub fn new(registry: Arc<VoiceRegistry>, pipeline: SynthesisPipeline) -> Self {
        Self { registry, pipeline }
    }

    pub async fn handle(&self, command: SpeakCommand) -> Result<SpeakResponse, ApplicationError> {
        let (voice, synthesizer) = self.registry.resolve(command.voice.as_deref())?;

        let buffer = self.pipeline.run(synthesizer.as_ref(), &command.text).await?;

        tracing::info!(
            voice = %voice,
            text_len = command.text.len(),
            frames = buffer.frame_count(),
            "Speech generated"
        );

        Ok(SpeakResponse {
            voice,
            wav: buffer.to_wav_bytes(),
        })
    }
}

// ============================================================================
// Play
// ============================================================================

/// Play Handler - 合成并通过本地输出设备播放
pub struct PlayHandler {
    registry: Arc<VoiceRegistry>,
    pipeline: SynthesisPipeline,
    player: Arc<dyn PlaybackPort>,
}

impl PlayHandler {
    pub fn new(
        registry: Arc<VoiceRegistry>,
        pipeline: SynthesisPipeline,
        player: Arc<dyn PlaybackPort>,
    ) -> Self {
        Self {
            registry,
            pipeline,
            player,
        }
    }

    pub async fn handle(&self, command: PlayCommand) -> Result<PlayResponse, ApplicationError> {
        let (voice, synthesizer) = self.registry.resolve(command.voice.as_deref())?;

        let buffer = self.pipeline.run(synthesizer.as_ref(), &command.text).await?;

        // 临时 WAV 随目录作用域自动删除
        let temp_dir = tempfile::tempdir()?;
        let wav_path = temp_dir.path().join(format!("speech_{}.wav", Uuid::new_v4()));
        tokio::fs::write(&wav_path, buffer.to_wav_bytes()).await?;

        let report = self.player.play(&wav_path).await?;

        tracing::info!(
            voice = %voice,
            backend = %report.backend,
            text_len = command.text.len(),
            "Speech played"
        );

        Ok(PlayResponse {
            text: command.text,
            voice,
            backend: report.backend,
        })
    }
}
