//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 音色配置
    #[serde(default)]
    pub voices: VoicesConfig,

    /// 播放配置
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            voices: VoicesConfig::default(),
            playback: PlaybackConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9003
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 音色配置
#[derive(Debug, Clone, Deserialize)]
pub struct VoicesConfig {
    /// 默认音色名称
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// 模型文件目录
    #[serde(default = "default_voice_dir")]
    pub voice_dir: PathBuf,

    /// 音色名 → 模型文件名映射
    #[serde(default = "default_models")]
    pub models: HashMap<String, String>,
}

fn default_voice() -> String {
    "amy".to_string()
}

fn default_voice_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".piper")
        .join("voices")
}

fn default_models() -> HashMap<String, String> {
    [
        ("amy", "en_US-amy-medium.onnx"),
        ("danny", "en_US-danny-low.onnx"),
        ("kathleen", "en_US-kathleen-low.onnx"),
        ("libritts", "en_US-libritts-high.onnx"),
        ("lessac", "en_US-lessac-medium.onnx"),
        ("ryan", "en_US-ryan-medium.onnx"),
    ]
    .into_iter()
    .map(|(name, file)| (name.to_string(), file.to_string()))
    .collect()
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            default_voice: default_voice(),
            voice_dir: default_voice_dir(),
            models: default_models(),
        }
    }
}

/// 播放配置
#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackConfig {
    /// 播放后端："auto" 或显式名称（paplay|aplay|sox|ffplay|afplay）
    #[serde(default = "default_backend")]
    pub backend: String,

    /// 前置静音时长（秒，≥0）
    #[serde(default = "default_silence_padding")]
    pub silence_padding_secs: f64,

    /// 播放进程时限（秒）
    #[serde(default = "default_playback_timeout")]
    pub timeout_secs: u64,
}

fn default_backend() -> String {
    "auto".to_string()
}

fn default_silence_padding() -> f64 {
    0.2
}

fn default_playback_timeout() -> u64 {
    30
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            silence_padding_secs: default_silence_padding(),
            timeout_secs: default_playback_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
