//! Audio Context - PCM 缓冲与 WAV 容器

mod value_objects;

pub use value_objects::{AudioBuffer, AudioSpec, WavError};
