//! 应用层命令定义

pub mod handlers;

/// 合成并返回音频
#[derive(Debug, Clone)]
pub struct SpeakCommand {
    /// 要合成的文本（非空，HTTP 层已校验）
    pub text: String,
    /// 音色名称；缺省时回退到配置的默认音色
    pub voice: Option<String>,
}

/// Speak 命令响应
#[derive(Debug, Clone)]
pub struct SpeakResponse {
    /// 实际使用的音色
    pub voice: String,
    /// 完整 WAV 字节流（已应用静音填充）
    pub wav: Vec<u8>,
}

/// 合成并本地播放
#[derive(Debug, Clone)]
pub struct PlayCommand {
    pub text: String,
    pub voice: Option<String>,
}

/// Play 命令响应
#[derive(Debug, Clone)]
pub struct PlayResponse {
    pub text: String,
    pub voice: String,
    /// 实际使用的播放后端
    pub backend: String,
}
