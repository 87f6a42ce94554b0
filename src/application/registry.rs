//! Voice Registry - 音色注册表
//!
//! 启动时构建一次，随后只读；键唯一，不支持热加载。
//! 作为 `Arc<VoiceRegistry>` 共享，解析无需加锁。

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::SynthesizerPort;
use crate::domain::voice::{VoiceError, VoiceName};

/// 音色注册表
///
/// 可能为空（所有模型加载失败时）；此时每次解析都返回
/// `VoiceError::Unavailable`，服务本身照常运行。
pub struct VoiceRegistry {
    voices: HashMap<String, Arc<dyn SynthesizerPort>>,
    default_voice: String,
}

impl VoiceRegistry {
    pub fn new(default_voice: impl Into<String>) -> Self {
        Self {
            voices: HashMap::new(),
            default_voice: default_voice.into(),
        }
    }

    /// 注册一个已加载的音色（仅在启动构建期调用）
    pub fn insert(&mut self, name: impl Into<String>, synthesizer: Arc<dyn SynthesizerPort>) {
        self.voices.insert(name.into(), synthesizer);
    }

    /// 解析音色
    ///
    /// 名称先经 `VoiceName` 规范化（去首尾空白）；未指定或空白名称
    /// 回退到配置的默认音色。空注册表 ⇒ `Unavailable`（而非
    /// `NotFound`）；名称缺失 ⇒ `NotFound` 并附带可用名称列表。
    pub fn resolve(
        &self,
        requested: Option<&str>,
    ) -> Result<(String, Arc<dyn SynthesizerPort>), VoiceError> {
        if self.voices.is_empty() {
            return Err(VoiceError::Unavailable);
        }

        let name = match requested.and_then(|raw| VoiceName::new(raw).ok()) {
            Some(name) => name.as_str().to_string(),
            None => self.default_voice.clone(),
        };
        match self.voices.get(&name) {
            Some(synthesizer) => Ok((name, synthesizer.clone())),
            None => Err(VoiceError::NotFound {
                requested: name,
                available: self.available(),
            }),
        }
    }

    /// 当前可用音色名称（排序后返回，保证输出确定性）
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = self.voices.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}
