//! 领域层
//!
//! 纯领域对象，不依赖基础设施：
//! - audio: PCM 缓冲、WAV 容器编解码、静音填充
//! - voice: 音色名称与解析错误

pub mod audio;
pub mod voice;
