//! 应用层查询定义

pub mod handlers;

use std::collections::BTreeMap;

/// 音色列表视图
#[derive(Debug, Clone)]
pub struct VoicesView {
    pub available: Vec<String>,
    pub default: String,
    /// 已知名称集合的静态人类可读描述
    pub descriptions: BTreeMap<String, String>,
}

/// 服务状态视图
#[derive(Debug, Clone)]
pub struct StatusView {
    pub models_loaded: usize,
    pub available_voices: Vec<String>,
    pub default_voice: String,
}
