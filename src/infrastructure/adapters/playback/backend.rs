//! Playback Backend - 已知播放程序的枚举与自动探测
//!
//! 每个后端携带固定的命令行模板（静音/无界面标志，文件路径为
//! 末位参数）。`auto` 按固定偏好顺序探测主机可执行搜索路径，
//! 返回首个可解析的程序；对固定的主机状态结果是确定的。

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::infrastructure::adapters::find_program;

/// 已知播放后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackBackend {
    Paplay,
    Aplay,
    /// sox 的播放入口是 `play` 程序
    Sox,
    Ffplay,
    /// macOS
    Afplay,
}

/// auto 模式的探测顺序（偏好从高到低）
const PROBE_ORDER: [PlaybackBackend; 5] = [
    PlaybackBackend::Paplay,
    PlaybackBackend::Aplay,
    PlaybackBackend::Sox,
    PlaybackBackend::Ffplay,
    PlaybackBackend::Afplay,
];

impl PlaybackBackend {
    /// 配置名称 → 后端
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "paplay" => Some(Self::Paplay),
            "aplay" => Some(Self::Aplay),
            "sox" => Some(Self::Sox),
            "ffplay" => Some(Self::Ffplay),
            "afplay" => Some(Self::Afplay),
            _ => None,
        }
    }

    /// 配置/日志中的后端名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Paplay => "paplay",
            Self::Aplay => "aplay",
            Self::Sox => "sox",
            Self::Ffplay => "ffplay",
            Self::Afplay => "afplay",
        }
    }

    /// 实际执行的程序名
    pub fn program(&self) -> &'static str {
        match self {
            Self::Paplay => "paplay",
            Self::Aplay => "aplay",
            Self::Sox => "play",
            Self::Ffplay => "ffplay",
            Self::Afplay => "afplay",
        }
    }

    /// 文件路径之前的固定参数
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Paplay => &[],
            Self::Aplay => &["-q"],
            Self::Sox => &["-q"],
            Self::Ffplay => &["-nodisp", "-autoexit", "-loglevel", "quiet"],
            Self::Afplay => &[],
        }
    }

    /// 解析播放后端
    ///
    /// 显式名称直接返回、不做探测——调用方被信任已正确选择，
    /// 不可用性推迟到调用时作为执行失败浮现。`"auto"` 按偏好
    /// 顺序探测给定目录，全部落空时返回 None（NoPlaybackBackend）。
    pub fn resolve(configured: &str, search_dirs: &[PathBuf]) -> Option<Self> {
        if configured != "auto" {
            let backend = Self::from_name(configured);
            if backend.is_none() {
                warn!(backend = %configured, "Unknown audio backend name");
            }
            return backend;
        }

        for backend in PROBE_ORDER {
            if find_program(backend.program(), search_dirs).is_some() {
                debug!(backend = backend.name(), "Audio backend resolved");
                return Some(backend);
            }
        }
        None
    }

    /// 完整命令行（诊断用）
    pub fn command_line(&self, wav_path: &Path) -> String {
        let mut parts = vec![self.program().to_string()];
        parts.extend(self.args().iter().map(|s| s.to_string()));
        parts.push(wav_path.display().to_string());
        parts.join(" ")
    }
}
