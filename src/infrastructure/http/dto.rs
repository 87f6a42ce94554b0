//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式（JSON 端点使用；/speak 直接返回 WAV 字节流）
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// 请求参数
// ============================================================================

/// /speak 与 /play 共用的查询参数
#[derive(Debug, Deserialize)]
pub struct SynthesisParams {
    /// 要合成的文本（必填、非空）
    pub text: Option<String>,
    /// 音色名称（缺省 ⇒ 配置的默认音色）
    pub voice: Option<String>,
}

// ============================================================================
// 响应 DTOs
// ============================================================================

/// GET / 响应
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub models_loaded: usize,
    pub available_voices: Vec<String>,
    pub default_voice: String,
    pub endpoints: EndpointsResponse,
}

/// 两个合成端点的调用形态
#[derive(Debug, Serialize)]
pub struct EndpointsResponse {
    pub speak: &'static str,
    pub play: &'static str,
    pub voices: &'static str,
}

/// GET /voices 响应
#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub available: Vec<String>,
    pub default: String,
    pub descriptions: BTreeMap<String, String>,
}

/// GET /play 确认响应
#[derive(Debug, Serialize)]
pub struct PlayAck {
    pub status: &'static str,
    pub text: String,
    pub voice: String,
    pub backend: String,
}
