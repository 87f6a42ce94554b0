//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SynthesizerPort、PlaybackPort）
//! - registry: 启动时构建、随后只读的音色注册表
//! - pipeline: 合成管线（模型调用 + 前置静音填充）
//! - commands: Speak/Play 命令及处理器
//! - queries: Voices/Status 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod queries;
pub mod registry;

pub use commands::{
    handlers::{PlayHandler, SpeakHandler},
    PlayCommand, PlayResponse, SpeakCommand, SpeakResponse,
};
pub use error::ApplicationError;
pub use pipeline::SynthesisPipeline;
pub use ports::{PlaybackError, PlaybackPort, PlaybackReport, SynthesisError, SynthesizerPort};
pub use queries::{
    handlers::{ListVoicesHandler, StatusHandler},
    StatusView, VoicesView,
};
pub use registry::VoiceRegistry;
