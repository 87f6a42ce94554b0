//! Voice Bridge - 自托管 TTS 桥接服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Audio: PCM 音频缓冲与 WAV 容器
//! - Voice: 音色名称与解析错误
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SynthesizerPort, PlaybackPort）
//! - Registry: 启动时构建、随后只读的音色注册表
//! - Pipeline: 合成 + 前置静音填充
//! - Commands/Queries: Speak/Play 命令与 Voices/Status 查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（/, /voices, /speak, /play）
//! - Adapters: Piper CLI 合成器、本地播放器进程调用

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
