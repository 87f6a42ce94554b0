//! Piper Synthesizer - 基于 Piper CLI 的本地语音合成
//!
//! 每个实例绑定一个已验证的模型文件；合成时启动
//! `piper -m MODEL -f OUT`，文本经 stdin 传入，产物 WAV 写入
//! 作用域临时目录（任何退出路径都会被清理）。
//!
//! Piper 可执行文件解析：`PIPER_BIN` 环境变量优先，否则探测 PATH。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;
use uuid::Uuid;

use crate::application::ports::{SynthesisError, SynthesizerPort};
use crate::domain::audio::AudioBuffer;
use crate::infrastructure::adapters::{find_program, path_search_dirs};

/// 模型加载错误（逐音色，非致命）
#[derive(Debug, Error)]
pub enum PiperLoadError {
    #[error("voice model not found: {0}")]
    ModelMissing(PathBuf),

    #[error("piper binary not found, set PIPER_BIN or install piper on PATH")]
    BinaryMissing,
}

/// Piper 合成器
///
/// 加载后不再变更；格式参数（采样率/位宽/声道）由模型决定，
/// 首次合成解析产物 WAV 后才可知。
#[derive(Debug)]
pub struct PiperSynthesizer {
    name: String,
    piper_bin: PathBuf,
    model_path: PathBuf,
}

impl PiperSynthesizer {
    /// 加载音色模型：校验模型文件存在并解析 piper 可执行文件
    pub fn load(name: impl Into<String>, model_path: PathBuf) -> Result<Self, PiperLoadError> {
        if !model_path.exists() {
            return Err(PiperLoadError::ModelMissing(model_path));
        }
        let piper_bin = resolve_piper_bin().ok_or(PiperLoadError::BinaryMissing)?;
        Self::with_binary(name, model_path, piper_bin)
    }

    /// 使用显式 piper 路径加载（测试与非常规安装）
    pub fn with_binary(
        name: impl Into<String>,
        model_path: PathBuf,
        piper_bin: PathBuf,
    ) -> Result<Self, PiperLoadError> {
        if !model_path.exists() {
            return Err(PiperLoadError::ModelMissing(model_path));
        }
        Ok(Self {
            name: name.into(),
            piper_bin,
            model_path,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 解析 piper 可执行文件：PIPER_BIN 环境变量优先，否则探测 PATH
fn resolve_piper_bin() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("PIPER_BIN") {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return Some(pb);
        }
    }
    find_program("piper", &path_search_dirs())
}

#[async_trait]
impl SynthesizerPort for PiperSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<AudioBuffer, SynthesisError> {
        let temp_dir = tempfile::tempdir()?;
        let out_wav = temp_dir.path().join(format!("piper_{}.wav", Uuid::new_v4()));

        let mut cmd = Command::new(&self.piper_bin);
        cmd.arg("-m")
            .arg(&self.model_path)
            .arg("-f")
            .arg(&out_wav)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        debug!(voice = %self.name, command = ?cmd, "Running piper");

        let mut child = cmd.spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            // 关闭 stdin，否则 piper 持续等待输入
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(SynthesisError::EngineFailed {
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let wav_bytes = tokio::fs::read(&out_wav).await?;
        AudioBuffer::from_wav_bytes(&wav_bytes)
            .map_err(|e| SynthesisError::InvalidOutput(e.to_string()))
        // temp_dir 离开作用域时连同产物 WAV 一起删除
    }

    fn model_path(&self) -> &Path {
        &self.model_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_requires_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PiperSynthesizer::with_binary(
            "amy",
            dir.path().join("missing.onnx"),
            dir.path().join("piper"),
        )
        .unwrap_err();
        assert!(matches!(err, PiperLoadError::ModelMissing(_)));
    }

    #[test]
    fn test_with_binary_accepts_existing_model() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("amy.onnx");
        std::fs::write(&model, b"model").unwrap();

        let synth =
            PiperSynthesizer::with_binary("amy", model.clone(), dir.path().join("piper")).unwrap();
        assert_eq!(synth.name(), "amy");
        assert_eq!(synth.model_path(), model.as_path());
    }

    #[tokio::test]
    async fn test_engine_failure_captures_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("amy.onnx");
        std::fs::write(&model, b"model").unwrap();

        // 伪 piper：向 stderr 写入后非零退出
        let fake_piper = dir.path().join("piper");
        std::fs::write(&fake_piper, "#!/bin/sh\necho 'bad model' >&2\nexit 1\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&fake_piper, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let synth = PiperSynthesizer::with_binary("amy", model, fake_piper).unwrap();
        let err = synth.synthesize("hello").await.unwrap_err();
        match err {
            SynthesisError::EngineFailed { detail } => assert!(detail.contains("bad model")),
            other => panic!("expected EngineFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_successful_run_parses_produced_wav() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("amy.onnx");
        std::fs::write(&model, b"model").unwrap();

        // 伪 piper：忽略输入，写出一个最小合法 WAV（由测试脚本生成）
        let wav = crate::domain::audio::AudioBuffer::new(
            crate::domain::audio::AudioSpec {
                sample_rate: 22_050,
                sample_width: 2,
                channels: 1,
            },
            vec![0u8; 8],
        )
        .to_wav_bytes();
        let wav_src = dir.path().join("canned.wav");
        std::fs::write(&wav_src, &wav).unwrap();

        let fake_piper = dir.path().join("piper");
        std::fs::write(
            &fake_piper,
            format!(
                "#!/bin/sh\nwhile read -r _; do :; done\ncp '{}' \"$4\"\n",
                wav_src.display()
            ),
        )
        .unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&fake_piper, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let synth = PiperSynthesizer::with_binary("amy", model, fake_piper).unwrap();
        let buffer = synth.synthesize("hello").await.unwrap();
        assert_eq!(buffer.spec().sample_rate, 22_050);
        assert_eq!(buffer.frame_count(), 4);
    }
}
