//! Voices/Status Query Handlers
//!
//! 只读查询，直接读取注册表，无失败路径。

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::queries::{StatusView, VoicesView};
use crate::application::registry::VoiceRegistry;

/// 已知音色集合的静态描述
const VOICE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("amy", "Natural female voice (medium quality)"),
    ("danny", "Clear male voice (low quality, fast)"),
    ("kathleen", "Professional female voice (low quality, fast)"),
    ("ryan", "Deep male voice (medium quality)"),
    ("lessac", "Alternative voice (medium quality)"),
    ("libritts", "High quality voice (slower)"),
];

/// ListVoices Handler
pub struct ListVoicesHandler {
    registry: Arc<VoiceRegistry>,
}

impl ListVoicesHandler {
    pub fn new(registry: Arc<VoiceRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self) -> VoicesView {
        let descriptions: BTreeMap<String, String> = VOICE_DESCRIPTIONS
            .iter()
            .map(|(name, desc)| (name.to_string(), desc.to_string()))
            .collect();

        VoicesView {
            available: self.registry.available(),
            default: self.registry.default_voice().to_string(),
            descriptions,
        }
    }
}

/// Status Handler - 健康检查
pub struct StatusHandler {
    registry: Arc<VoiceRegistry>,
}

impl StatusHandler {
    pub fn new(registry: Arc<VoiceRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self) -> StatusView {
        StatusView {
            models_loaded: self.registry.len(),
            available_voices: self.registry.available(),
            default_voice: self.registry.default_voice().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::tts::FakeSynthesizer;

    fn registry() -> Arc<VoiceRegistry> {
        let mut registry = VoiceRegistry::new("amy");
        registry.insert("ryan", Arc::new(FakeSynthesizer::beep()));
        registry.insert("amy", Arc::new(FakeSynthesizer::beep()));
        Arc::new(registry)
    }

    #[test]
    fn test_voices_view_lists_loaded_and_default() {
        let view = ListVoicesHandler::new(registry()).handle();
        assert_eq!(view.available, vec!["amy", "ryan"]);
        assert_eq!(view.default, "amy");
        assert!(view.descriptions.contains_key("kathleen"));
    }

    #[test]
    fn test_status_counts_models() {
        let view = StatusHandler::new(registry()).handle();
        assert_eq!(view.models_loaded, 2);
        assert_eq!(view.default_voice, "amy");
    }
}
