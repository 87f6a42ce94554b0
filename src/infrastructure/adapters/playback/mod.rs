//! Playback Adapters - 本地音频输出

mod backend;
mod invoker;

pub use backend::PlaybackBackend;
pub use invoker::{ProcessPlayer, ProcessPlayerConfig};
