//! Process Player - 外部播放器进程调用
//!
//! 每个请求解析一次后端、启动一个子进程，阻塞该请求直到进程
//! 退出或超出时限；并发请求可同时播放（允许声音重叠），不排队、
//! 不重试。超时按失败处理并杀死子进程。

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use super::backend::PlaybackBackend;
use crate::application::ports::{PlaybackError, PlaybackPort, PlaybackReport};
use crate::infrastructure::adapters::path_search_dirs;

/// Process Player 配置
#[derive(Debug, Clone)]
pub struct ProcessPlayerConfig {
    /// "auto" 或显式后端名称
    pub backend: String,
    /// 子进程时限（秒）
    pub timeout_secs: u64,
}

impl Default for ProcessPlayerConfig {
    fn default() -> Self {
        Self {
            backend: "auto".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Process Player
///
/// 无共享可变状态；auto 模式下每次调用重新探测（不缓存），
/// 对不变的主机环境结果一致。
pub struct ProcessPlayer {
    config: ProcessPlayerConfig,
    /// None ⇒ 每次调用从 PATH 解析；测试可注入固定目录
    search_dirs: Option<Vec<std::path::PathBuf>>,
}

impl ProcessPlayer {
    pub fn new(config: ProcessPlayerConfig) -> Self {
        Self {
            config,
            search_dirs: None,
        }
    }

    #[cfg(test)]
    fn with_search_dirs(config: ProcessPlayerConfig, dirs: Vec<std::path::PathBuf>) -> Self {
        Self {
            config,
            search_dirs: Some(dirs),
        }
    }
}

#[async_trait]
impl PlaybackPort for ProcessPlayer {
    async fn play(&self, wav_path: &Path) -> Result<PlaybackReport, PlaybackError> {
        let search_dirs = match &self.search_dirs {
            Some(dirs) => dirs.clone(),
            None => path_search_dirs(),
        };
        let backend = PlaybackBackend::resolve(&self.config.backend, &search_dirs)
            .ok_or(PlaybackError::NoBackend)?;

        debug!(
            backend = backend.name(),
            command = %backend.command_line(wav_path),
            "Invoking audio player"
        );

        let mut cmd = Command::new(backend.program());
        cmd.args(backend.args()).arg(wav_path);
        execute(cmd, Duration::from_secs(self.config.timeout_secs)).await?;

        Ok(PlaybackReport {
            backend: backend.name().to_string(),
        })
    }
}

/// 运行子进程并按时限裁决
///
/// 退出码 0 ⇒ Ok；非零 ⇒ Failed（携带捕获的 stderr，缺失时给
/// 通用消息）；超时 ⇒ Timeout（kill_on_drop 负责收割子进程）。
/// 启动失败（程序不存在等）同样按 Failed 上报——显式后端的
/// 不可用性就在这里浮现。
async fn execute(mut cmd: Command, limit: Duration) -> Result<(), PlaybackError> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(|e| PlaybackError::Failed {
        detail: e.to_string(),
    })?;

    match timeout(limit, child.wait_with_output()).await {
        Ok(Ok(output)) if output.status.success() => Ok(()),
        Ok(Ok(output)) => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(PlaybackError::Failed {
                detail: if stderr.is_empty() {
                    "unknown error".to_string()
                } else {
                    stderr
                },
            })
        }
        Ok(Err(e)) => Err(PlaybackError::Io(e)),
        Err(_) => Err(PlaybackError::Timeout {
            secs: limit.as_secs(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_execute_success_on_zero_exit() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("exit 0");
        assert!(execute(cmd, Duration::from_secs(5)).await.is_ok());
    }

    #[tokio::test]
    async fn test_execute_failure_captures_stderr() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("echo 'device busy' >&2; exit 1");
        let err = execute(cmd, Duration::from_secs(5)).await.unwrap_err();
        match err {
            PlaybackError::Failed { detail } => assert!(detail.contains("device busy")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_failure_without_stderr_uses_generic_message() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("exit 3");
        let err = execute(cmd, Duration::from_secs(5)).await.unwrap_err();
        match err {
            PlaybackError::Failed { detail } => assert_eq!(detail, "unknown error"),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_overrunning_process_is_timeout_not_failure() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("sleep 30");
        let err = execute(cmd, Duration::from_millis(100)).await.unwrap_err();
        assert!(matches!(err, PlaybackError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_spawn_failure_is_playback_failed() {
        let cmd = Command::new("/nonexistent/player-binary");
        let err = execute(cmd, Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, PlaybackError::Failed { .. }));
    }

    #[tokio::test]
    async fn test_auto_with_no_players_reports_no_backend() {
        // 探测目录为空 ⇒ 无后端可解析，不会启动任何进程
        let empty = tempfile::tempdir().unwrap();
        let player = ProcessPlayer::with_search_dirs(
            ProcessPlayerConfig::default(),
            vec![empty.path().to_path_buf()],
        );
        let err = player.play(Path::new("/tmp/a.wav")).await.unwrap_err();
        assert!(matches!(err, PlaybackError::NoBackend));
    }
}
