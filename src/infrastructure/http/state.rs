//! Application State
//!
//! 包含注册表与全部 Command/Query Handlers 的应用状态。
//! 注册表构建后只读，所有请求无锁并发读取。

use std::sync::Arc;

use crate::application::{
    ListVoicesHandler, PlayHandler, PlaybackPort, SpeakHandler, StatusHandler, SynthesisPipeline,
    VoiceRegistry,
};

/// 应用状态
pub struct AppState {
    pub registry: Arc<VoiceRegistry>,

    // ========== Command Handlers ==========
    pub speak_handler: SpeakHandler,
    pub play_handler: PlayHandler,

    // ========== Query Handlers ==========
    pub list_voices_handler: ListVoicesHandler,
    pub status_handler: StatusHandler,
}

impl AppState {
    pub fn new(
        registry: Arc<VoiceRegistry>,
        pipeline: SynthesisPipeline,
        player: Arc<dyn PlaybackPort>,
    ) -> Self {
        Self {
            registry: registry.clone(),
            speak_handler: SpeakHandler::new(registry.clone(), pipeline),
            play_handler: PlayHandler::new(registry.clone(), pipeline, player),
            list_voices_handler: ListVoicesHandler::new(registry.clone()),
            status_handler: StatusHandler::new(registry),
        }
    }
}
