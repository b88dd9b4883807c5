//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::language::Language;
use crate::core::signal::SoundFiles;

/// hanmorse 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MorseConfig {
    /// `--lang` 없이 복호화할 때 쓰는 언어
    #[serde(default)]
    pub default_lang: Language,
    /// 신호별 소리 파일
    #[serde(default)]
    pub sounds: SoundFiles,
}

/// 설정 파일 읽기/쓰기 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {}", e),
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

fn absolute_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/hanmorse/config.json
/// (없으면 ~/.config, 그것도 없으면 /var/tmp)
pub fn config_path() -> PathBuf {
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("hanmorse").join("config.json")
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<MorseConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> MorseConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => MorseConfig::default(),
        Err(e) => {
            log::warn!("{}: {}, using defaults", path.display(), e);
            MorseConfig::default()
        }
    }
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &MorseConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("hanmorse-test-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_default_config() {
        let config = MorseConfig::default();
        assert_eq!(config.default_lang, Language::English);
        assert_eq!(config.sounds, SoundFiles::default());
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // sounds 항목이 없는 이전 설정 파일
        let json = r#"{"default_lang": "KR"}"#;
        let config: MorseConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_lang, Language::Korean);
        assert!(config.sounds.dot.is_none());

        let config: MorseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MorseConfig::default());
    }

    #[test]
    fn test_partial_sounds() {
        let json = r#"{"sounds": {"dot": "/snd/dot.wav"}}"#;
        let config: MorseConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.sounds.dot, Some(PathBuf::from("/snd/dot.wav")));
        assert!(config.sounds.dash.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("save");
        let path = dir.join("nested").join("config.json");
        let mut config = MorseConfig::default();
        config.default_lang = Language::Korean;
        config.sounds.word_gap = Some(PathBuf::from("word.wav"));

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_errors() {
        let dir = scratch_dir("errors");
        let missing = dir.join("missing.json");
        assert!(matches!(load_config_from(&missing), Err(ConfigError::Io(_))));

        fs::create_dir_all(&dir).unwrap();
        let bad = dir.join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(load_config_from(&bad), Err(ConfigError::Parse(_))));

        let bad_lang = dir.join("bad_lang.json");
        fs::write(&bad_lang, r#"{"default_lang": "JP"}"#).unwrap();
        assert!(matches!(load_config_from(&bad_lang), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path();
        assert!(path.ends_with("hanmorse/config.json"));
    }
}
