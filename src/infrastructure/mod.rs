//! 基础设施层
//!
//! - adapters: Piper CLI 合成器、本地播放器进程
//! - http: Axum HTTP 服务

pub mod adapters;
pub mod http;
