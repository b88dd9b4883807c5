//! 복호화 언어 선택자

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 복호화에 사용할 역변환 테이블 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// 영문 (라틴 문자, 숫자, 문장부호)
    #[default]
    #[serde(rename = "EN")]
    English,
    /// 한글 자모
    #[serde(rename = "KR")]
    Korean,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Korean];

    /// 선택자 코드 ("EN" / "KR")
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Korean => "KR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 알 수 없는 언어 선택자
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    Unknown(String),
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageError::Unknown(s) => {
                write!(f, "unknown language selector '{}' (expected EN or KR)", s)
            }
        }
    }
}

impl std::error::Error for LanguageError {}

impl FromStr for Language {
    type Err = LanguageError;

    /// 선택자 코드는 대소문자를 구분한다
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EN" => Ok(Language::English),
            "KR" => Ok(Language::Korean),
            other => Err(LanguageError::Unknown(other.to_string())),
        }
    }
}
