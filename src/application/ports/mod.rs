//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod playback;
mod synthesizer;

pub use playback::{PlaybackError, PlaybackPort, PlaybackReport};
pub use synthesizer::{SynthesisError, SynthesizerPort};
