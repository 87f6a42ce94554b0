//! Voice Context - 音色领域对象

mod errors;
mod value_objects;

pub use errors::VoiceError;
pub use value_objects::VoiceName;
