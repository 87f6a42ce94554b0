//! HTTP Handlers

mod speak;
mod status;
mod voices;

pub use speak::{play, speak};
pub use status::status;
pub use voices::list_voices;
