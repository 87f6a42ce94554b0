//! Infrastructure Adapters
//!
//! 出站端口的具体实现，以及共享的可执行文件探测工具。

pub mod playback;
pub mod tts;

use std::path::{Path, PathBuf};

/// 在给定目录列表中查找可执行文件
///
/// 带路径分隔符的名称按原样检验存在性；裸名称逐目录探测。
/// 除目录查询外无副作用，结果对固定的目录内容是确定的。
pub fn find_program(name: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    if name.contains(std::path::MAIN_SEPARATOR) {
        let p = PathBuf::from(name);
        return if p.exists() { Some(p) } else { None };
    }
    for dir in search_dirs {
        let candidate = Path::new(dir).join(name);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

/// 从 PATH 环境变量解析探测目录
pub fn path_search_dirs() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_program_in_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("paplay"), b"").unwrap();

        let dirs = vec![dir.path().to_path_buf()];
        assert!(find_program("paplay", &dirs).is_some());
        assert!(find_program("aplay", &dirs).is_none());
    }

    #[test]
    fn test_find_program_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("piper");
        std::fs::write(&bin, b"").unwrap();

        assert_eq!(
            find_program(bin.to_str().unwrap(), &[]),
            Some(bin.clone())
        );
        assert!(find_program(
            dir.path().join("missing").to_str().unwrap(),
            &[]
        )
        .is_none());
    }
}
