//! Audio Context - Value Objects
//!
//! PCM 音频缓冲与 WAV 容器编解码：
//! - WAV 解析（RIFF/fmt/data chunk 遍历）
//! - WAV 编码（44 字节规范 PCM 头）
//! - 前置静音填充

use thiserror::Error;

/// WAV 容器错误
#[derive(Debug, Error)]
pub enum WavError {
    #[error("WAV data too short")]
    TooShort,

    #[error("invalid WAV: missing RIFF header")]
    MissingRiff,

    #[error("invalid WAV: missing WAVE identifier")]
    MissingWave,

    #[error("invalid WAV: missing fmt chunk")]
    MissingFmt,

    #[error("invalid WAV: missing data chunk")]
    MissingData,

    #[error("unsupported WAV format tag: {0} (only PCM is supported)")]
    UnsupportedFormat(u16),

    #[error("invalid WAV: {0}")]
    Malformed(String),
}

/// PCM 格式参数
///
/// `sample_width` 以字节计（16-bit PCM 为 2）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    pub sample_rate: u32,
    pub sample_width: u16,
    pub channels: u16,
}

impl AudioSpec {
    /// 每帧字节数（一帧 = 所有声道的一个采样）
    pub fn frame_bytes(&self) -> usize {
        self.sample_width as usize * self.channels as usize
    }
}

/// PCM 音频缓冲
///
/// 不变量: `frames.len()` 是 `spec.frame_bytes()` 的整数倍。
/// 每次请求新建，不缓存、不跨请求共享。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    spec: AudioSpec,
    frames: Vec<u8>,
}

impl AudioBuffer {
    pub fn new(spec: AudioSpec, frames: Vec<u8>) -> Self {
        debug_assert_eq!(frames.len() % spec.frame_bytes().max(1), 0);
        Self { spec, frames }
    }

    pub fn spec(&self) -> AudioSpec {
        self.spec
    }

    pub fn frames(&self) -> &[u8] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        let fb = self.spec.frame_bytes();
        if fb == 0 {
            return 0;
        }
        self.frames.len() / fb
    }

    /// 解析 WAV 字节流
    ///
    /// 遍历 RIFF chunk，要求存在 fmt 与 data；仅接受 PCM（format tag 1）。
    pub fn from_wav_bytes(data: &[u8]) -> Result<Self, WavError> {
        if data.len() < 44 {
            return Err(WavError::TooShort);
        }
        if &data[0..4] != b"RIFF" {
            return Err(WavError::MissingRiff);
        }
        if &data[8..12] != b"WAVE" {
            return Err(WavError::MissingWave);
        }

        let mut pos = 12;
        let mut spec: Option<AudioSpec> = None;
        let mut frames: Option<Vec<u8>> = None;

        while pos + 8 <= data.len() {
            let chunk_id = &data[pos..pos + 4];
            let chunk_size =
                u32::from_le_bytes([data[pos + 4], data[pos + 5], data[pos + 6], data[pos + 7]])
                    as usize;
            let body_start = pos + 8;
            let body_end = body_start
                .checked_add(chunk_size)
                .filter(|end| *end <= data.len())
                .ok_or_else(|| WavError::Malformed("chunk exceeds buffer".to_string()))?;

            match chunk_id {
                b"fmt " => {
                    if chunk_size < 16 {
                        return Err(WavError::Malformed("fmt chunk too small".to_string()));
                    }
                    let fmt = &data[body_start..body_start + 16];
                    let format_tag = u16::from_le_bytes([fmt[0], fmt[1]]);
                    if format_tag != 1 {
                        return Err(WavError::UnsupportedFormat(format_tag));
                    }
                    let channels = u16::from_le_bytes([fmt[2], fmt[3]]);
                    let sample_rate = u32::from_le_bytes([fmt[4], fmt[5], fmt[6], fmt[7]]);
                    let bits_per_sample = u16::from_le_bytes([fmt[14], fmt[15]]);
                    if channels == 0
                        || sample_rate == 0
                        || bits_per_sample == 0
                        || bits_per_sample % 8 != 0
                    {
                        return Err(WavError::Malformed("invalid fmt parameters".to_string()));
                    }
                    spec = Some(AudioSpec {
                        sample_rate,
                        sample_width: bits_per_sample / 8,
                        channels,
                    });
                }
                b"data" => {
                    frames = Some(data[body_start..body_end].to_vec());
                    break;
                }
                _ => {}
            }

            pos = body_end;
            // chunk 按偶数字节对齐
            if chunk_size % 2 != 0 {
                pos += 1;
            }
        }

        let spec = spec.ok_or(WavError::MissingFmt)?;
        let frames = frames.ok_or(WavError::MissingData)?;
        Ok(Self::new(spec, frames))
    }

    /// 编码为 WAV 字节流（规范 44 字节 PCM 头 + 帧数据）
    pub fn to_wav_bytes(&self) -> Vec<u8> {
        let bits_per_sample = self.spec.sample_width * 8;
        let block_align = self.spec.frame_bytes() as u16;
        let byte_rate = self.spec.sample_rate * block_align as u32;
        let data_size = self.frames.len();
        let file_size = 36 + data_size;

        let mut wav = Vec::with_capacity(44 + data_size);

        // RIFF header
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(file_size as u32).to_le_bytes());
        wav.extend_from_slice(b"WAVE");

        // fmt chunk
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
        wav.extend_from_slice(&self.spec.channels.to_le_bytes());
        wav.extend_from_slice(&self.spec.sample_rate.to_le_bytes());
        wav.extend_from_slice(&byte_rate.to_le_bytes());
        wav.extend_from_slice(&block_align.to_le_bytes());
        wav.extend_from_slice(&bits_per_sample.to_le_bytes());

        // data chunk
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&(data_size as u32).to_le_bytes());
        wav.extend_from_slice(&self.frames);

        wav
    }

    /// 前置静音填充
    ///
    /// `silence_frames = round(sample_rate * seconds)`，每帧为
    /// `frame_bytes()` 个零字节，填充块与语音帧使用同一格式参数。
    /// 静音在语音之前（设备唤醒 lead-in），不追加在末尾。
    pub fn prepend_silence(&mut self, seconds: f64) {
        if seconds <= 0.0 {
            return;
        }
        let silence_frames = (self.spec.sample_rate as f64 * seconds).round() as usize;
        if silence_frames == 0 {
            return;
        }
        let silence_bytes = silence_frames * self.spec.frame_bytes();
        let mut padded = Vec::with_capacity(silence_bytes + self.frames.len());
        padded.resize(silence_bytes, 0u8);
        padded.extend_from_slice(&self.frames);
        self.frames = padded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono_16k(frames: Vec<u8>) -> AudioBuffer {
        AudioBuffer::new(
            AudioSpec {
                sample_rate: 16_000,
                sample_width: 2,
                channels: 1,
            },
            frames,
        )
    }

    #[test]
    fn test_wav_roundtrip() {
        let buffer = mono_16k(vec![1, 2, 3, 4, 5, 6]);
        let wav = buffer.to_wav_bytes();
        let parsed = AudioBuffer::from_wav_bytes(&wav).unwrap();
        assert_eq!(parsed, buffer);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            AudioBuffer::from_wav_bytes(&[0u8; 10]),
            Err(WavError::TooShort)
        ));
        let mut wav = mono_16k(vec![0; 4]).to_wav_bytes();
        wav[0] = b'X';
        assert!(matches!(
            AudioBuffer::from_wav_bytes(&wav),
            Err(WavError::MissingRiff)
        ));
    }

    #[test]
    fn test_parse_rejects_non_pcm() {
        let mut wav = mono_16k(vec![0; 4]).to_wav_bytes();
        // format tag 位于 fmt chunk 起始处（偏移 20）
        wav[20] = 3; // IEEE float
        assert!(matches!(
            AudioBuffer::from_wav_bytes(&wav),
            Err(WavError::UnsupportedFormat(3))
        ));
    }

    #[test]
    fn test_prepend_silence_frame_count() {
        let mut buffer = mono_16k(vec![7u8; 200]);
        let original_frames = buffer.frame_count();
        buffer.prepend_silence(0.5);
        assert_eq!(buffer.frame_count(), 8_000 + original_frames);
    }

    #[test]
    fn test_prepend_silence_leading_bytes_are_zero() {
        let mut buffer = mono_16k(vec![7u8; 20]);
        buffer.prepend_silence(0.001);
        // round(16000 * 0.001) = 16 帧 = 32 字节
        assert!(buffer.frames()[..32].iter().all(|b| *b == 0));
        assert_eq!(&buffer.frames()[32..], &[7u8; 20]);
    }

    #[test]
    fn test_zero_padding_is_identity() {
        let original = mono_16k(vec![9u8; 64]);
        let mut padded = original.clone();
        padded.prepend_silence(0.0);
        assert_eq!(padded, original);
    }

    #[test]
    fn test_padding_rounds_sample_count() {
        // round(22050 * 0.2) = 4410
        let mut buffer = AudioBuffer::new(
            AudioSpec {
                sample_rate: 22_050,
                sample_width: 2,
                channels: 1,
            },
            vec![1u8; 100],
        );
        buffer.prepend_silence(0.2);
        assert_eq!(buffer.frame_count(), 4_410 + 50);
    }

    #[test]
    fn test_padding_respects_channel_count() {
        let mut stereo = AudioBuffer::new(
            AudioSpec {
                sample_rate: 1_000,
                sample_width: 2,
                channels: 2,
            },
            vec![5u8; 8],
        );
        stereo.prepend_silence(0.01);
        // 10 帧 * 4 字节/帧
        assert_eq!(stereo.frames().len(), 40 + 8);
    }
}
