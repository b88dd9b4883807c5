//! 모스 부호 -> 신호 순서 변환
//!
//! 부호 문자열을 점/선과 간격으로 이루어진 송신 순서로 펼친다.
//! 실제 소리는 만들지 않는다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 송신 신호 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Dot,
    Dash,
    /// 점/선 뒤의 짧은 간격
    ElementGap,
    /// 글자 사이 간격
    LetterGap,
    /// 단어 사이 간격
    WordGap,
}

impl Signal {
    pub fn name(&self) -> &'static str {
        match self {
            Signal::Dot => "dot",
            Signal::Dash => "dash",
            Signal::ElementGap => "element_gap",
            Signal::LetterGap => "letter_gap",
            Signal::WordGap => "word_gap",
        }
    }
}

/// 부호 문자열을 신호 순서로 변환
///
/// ` / `는 단어 간격 하나로 합친다. 그 외 공백은 글자 간격이다.
pub fn to_signals(code: &str) -> Vec<Signal> {
    let collapsed = code.replace(" / ", "/");
    let mut signals = Vec::with_capacity(collapsed.len() * 2);

    for c in collapsed.chars() {
        match c {
            '.' => signals.extend([Signal::Dot, Signal::ElementGap]),
            '-' => signals.extend([Signal::Dash, Signal::ElementGap]),
            ' ' => signals.push(Signal::LetterGap),
            '/' => signals.push(Signal::WordGap),
            _ => {}
        }
    }

    signals
}

/// 신호별 소리 파일 경로
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SoundFiles {
    #[serde(default)]
    pub dot: Option<PathBuf>,
    #[serde(default)]
    pub dash: Option<PathBuf>,
    #[serde(default)]
    pub element_gap: Option<PathBuf>,
    #[serde(default)]
    pub letter_gap: Option<PathBuf>,
    #[serde(default)]
    pub word_gap: Option<PathBuf>,
}

impl SoundFiles {
    /// 신호에 대응하는 파일
    pub fn file_for(&self, signal: Signal) -> Option<&PathBuf> {
        match signal {
            Signal::Dot => self.dot.as_ref(),
            Signal::Dash => self.dash.as_ref(),
            Signal::ElementGap => self.element_gap.as_ref(),
            Signal::LetterGap => self.letter_gap.as_ref(),
            Signal::WordGap => self.word_gap.as_ref(),
        }
    }

    /// 신호 순서를 파일 경로 순서로 변환
    /// 필요한 파일이 하나라도 설정되지 않았으면 None
    pub fn sequence(&self, signals: &[Signal]) -> Option<Vec<PathBuf>> {
        signals
            .iter()
            .map(|&s| self.file_for(s).cloned())
            .collect()
    }

    /// 설정되지 않은 신호 목록
    pub fn missing(&self, signals: &[Signal]) -> Vec<Signal> {
        let mut missing: Vec<Signal> = Vec::new();
        for &s in signals {
            if self.file_for(s).is_none() && !missing.contains(&s) {
                missing.push(s);
            }
        }
        missing
    }
}
