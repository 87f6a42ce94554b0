//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
///
/// 调用方以默认配置恢复并记录警告，绝不因此终止进程
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 识别的播放后端名称
const KNOWN_BACKENDS: &[&str] = &["auto", "paplay", "aplay", "sox", "ffplay", "afplay"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VOICE_BRIDGE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VOICE_BRIDGE_SERVER__HOST=127.0.0.1`
/// - `VOICE_BRIDGE_SERVER__PORT=9003`
/// - `VOICE_BRIDGE_VOICES__DEFAULT_VOICE=ryan`
/// - `VOICE_BRIDGE_PLAYBACK__BACKEND=paplay`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）；models 映射的默认值由
    //    serde 字段默认提供
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 9003)?
        .set_default("voices.default_voice", "amy")?
        .set_default("playback.backend", "auto")?
        .set_default("playback.silence_padding_secs", 0.2)?
        .set_default("playback.timeout_secs", 30)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: VOICE_BRIDGE_，层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("VOICE_BRIDGE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建并反序列化
    let config = builder.build()?;
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 5. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.voices.default_voice.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Default voice cannot be empty".to_string(),
        ));
    }

    let padding = config.playback.silence_padding_secs;
    if !padding.is_finite() || padding < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "Silence padding must be a finite value >= 0, got {}",
            padding
        )));
    }

    if config.playback.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Playback timeout cannot be 0".to_string(),
        ));
    }

    if !KNOWN_BACKENDS.contains(&config.playback.backend.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "Unknown audio backend '{}', expected one of: {}",
            config.playback.backend,
            KNOWN_BACKENDS.join(", ")
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Default Voice: {}", config.voices.default_voice);
    tracing::info!("Voice Directory: {:?}", config.voices.voice_dir);
    tracing::info!("Configured Models: {}", config.voices.models.len());
    tracing::info!("Audio Backend: {}", config.playback.backend);
    tracing::info!(
        "Silence Padding: {}s",
        config.playback.silence_padding_secs
    );
    tracing::info!("Playback Timeout: {}s", config.playback.timeout_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
