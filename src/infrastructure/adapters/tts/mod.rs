//! TTS Adapters - SynthesizerPort 的具体实现

mod fake;
mod piper;

pub use fake::FakeSynthesizer;
pub use piper::{PiperLoadError, PiperSynthesizer};

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::application::ports::SynthesizerPort;
use crate::application::registry::VoiceRegistry;
use crate::config::VoicesConfig;

/// 启动时构建音色注册表
///
/// 每个条目独立尝试加载；单个模型缺失或损坏只记录警告并跳过，
/// 绝不中断整体构建。结果可能为空——服务照常启动，所有合成请求
/// 将以 VoiceUnavailable 失败。
pub fn build_registry(config: &VoicesConfig) -> VoiceRegistry {
    let mut registry = VoiceRegistry::new(&config.default_voice);

    // 按名称排序，保证加载日志顺序可复现
    let mut entries: Vec<(&String, &String)> = config.models.iter().collect();
    entries.sort();

    for (name, filename) in entries {
        let model_path = config.voice_dir.join(filename);
        match PiperSynthesizer::load(name, model_path) {
            Ok(synthesizer) => {
                info!(voice = %name, model = %synthesizer.model_path().display(), "Voice model loaded");
                registry.insert(name.clone(), Arc::new(synthesizer));
            }
            Err(e) => {
                warn!(voice = %name, error = %e, "Skipping voice model");
            }
        }
    }

    if registry.is_empty() {
        error!("No voice models loaded! All synthesis requests will fail until voices are installed");
    } else {
        info!(
            count = registry.len(),
            voices = ?registry.available(),
            "Voice registry built"
        );
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn voices_config(dir: &std::path::Path, models: &[(&str, &str)]) -> VoicesConfig {
        VoicesConfig {
            default_voice: "amy".to_string(),
            voice_dir: dir.to_path_buf(),
            models: models
                .iter()
                .map(|(n, f)| (n.to_string(), f.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_missing_model_is_skipped_without_affecting_others() {
        let dir = tempfile::tempdir().unwrap();
        // piper 可执行文件与一个模型文件就位
        std::fs::write(dir.path().join("piper"), b"").unwrap();
        std::env::set_var("PIPER_BIN", dir.path().join("piper"));
        std::fs::write(dir.path().join("amy.onnx"), b"model").unwrap();

        let config = voices_config(
            dir.path(),
            &[("amy", "amy.onnx"), ("danny", "missing.onnx")],
        );
        let registry = build_registry(&config);

        assert_eq!(registry.available(), vec!["amy"]);
        std::env::remove_var("PIPER_BIN");
    }

    #[test]
    fn test_all_models_missing_yields_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let config = voices_config(dir.path(), &[("amy", "missing.onnx")]);
        let registry = build_registry(&config);
        assert!(registry.is_empty());
    }
}
