//! 텍스트 <-> 모스 부호 변환기
//!
//! 두 함수 모두 실패하지 않는다. 매핑 없는 문자(부호화)나 매핑 없는
//! 부호(복호화)는 출력 없이 버려진다.

use super::language::Language;
use super::table::{forward_table, inverse_table, InverseTable};
use super::unicode::{decompose_str, script_of, Script};

/// 단어 구분 토큰
pub const WORD_BOUNDARY: char = '/';

/// 문자 하나의 모스 부호 조회 (문자 종류에 따라 테이블 선택)
pub fn pattern_of(c: char) -> Option<&'static str> {
    let lang = match script_of(c) {
        Script::Hangul => Language::Korean,
        Script::Other => Language::English,
    };
    forward_table(lang).get(&c).copied()
}

/// 텍스트를 모스 부호로 변환
///
/// 완성형 한글은 자모로 풀어서 부호화한다. 공백은 `/` 토큰이 되고,
/// 토큰 사이는 공백 하나로 구분한다.
pub fn encode(text: &str) -> String {
    let normalized = decompose_str(text).to_lowercase();
    let mut code = String::with_capacity(normalized.len() * 4);

    for c in normalized.chars() {
        if c == ' ' {
            code.push(WORD_BOUNDARY);
            code.push(' ');
            continue;
        }
        match pattern_of(c) {
            Some(pattern) => {
                code.push_str(pattern);
                code.push(' ');
            }
            None => log::trace!("encode: dropping unmapped character {:?}", c),
        }
    }

    if code.ends_with(' ') {
        code.pop();
    }
    code
}

/// 모스 부호를 지정한 언어의 텍스트로 변환 (대문자 출력)
///
/// 자모를 음절로 다시 조합하지는 않는다: `decode(encode("한"), KR)`은 "ㅎㅏㄴ".
pub fn decode(code: &str, lang: Language) -> String {
    run_decoder(code, Some(inverse_table(lang)))
}

/// 문자열 선택자("EN"/"KR")로 복호화
/// 알 수 없는 선택자면 모든 부호가 매핑 없음으로 처리되어 단어 구분 공백만 남는다
pub fn decode_with_selector(code: &str, selector: &str) -> String {
    match selector.parse::<Language>() {
        Ok(lang) => decode(code, lang),
        Err(e) => {
            log::debug!("decode: {}", e);
            run_decoder(code, None)
        }
    }
}

fn run_decoder(code: &str, table: Option<&InverseTable>) -> String {
    let mut decoder = MorseDecoder::new(table);
    for c in code.chars() {
        decoder.feed(c);
    }
    decoder.finish()
}

/// 복호화 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 누적된 부호 없음
    Idle,
    /// 한 글자의 부호를 모으는 중
    Accumulating,
}

/// 문자 단위 모스 복호화 상태 기계
struct MorseDecoder<'t> {
    state: State,
    /// 현재 글자의 부호
    pattern: String,
    /// None이면 어떤 부호도 매핑되지 않음
    table: Option<&'t InverseTable>,
    /// 출력 버퍼
    output: String,
}

impl<'t> MorseDecoder<'t> {
    fn new(table: Option<&'t InverseTable>) -> Self {
        Self {
            state: State::Idle,
            pattern: String::new(),
            table,
            output: String::new(),
        }
    }

    fn feed(&mut self, c: char) {
        match c {
            '.' | '-' => {
                self.pattern.push(c);
                self.state = State::Accumulating;
            }
            ' ' => self.flush(),
            WORD_BOUNDARY => {
                // 공백 없이 바로 `/`가 오면 누적된 부호는 조회 없이 버린다
                if self.state == State::Accumulating {
                    log::trace!("decode: abandoning {:?} at word boundary", self.pattern);
                }
                self.reset();
                self.output.push(' ');
            }
            _ => {}
        }
    }

    /// 누적된 부호를 조회해서 출력하고 초기화
    fn flush(&mut self) {
        if self.state == State::Accumulating {
            match self.table.and_then(|t| t.get(self.pattern.as_str())) {
                Some(&c) => self.output.push(c),
                None => log::trace!("decode: dropping unmapped pattern {:?}", self.pattern),
            }
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.pattern.clear();
        self.state = State::Idle;
    }

    fn finish(mut self) -> String {
        self.flush();
        self.output.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_letters() {
        assert_eq!(encode("A"), ".-");
        assert_eq!(encode("e"), ".");
        assert_eq!(encode("sos"), "... --- ...");
    }

    #[test]
    fn test_encode_spaces() {
        assert_eq!(encode("a b"), ".- / -...");
        assert_eq!(encode("a  b"), ".- / / -...");
        assert_eq!(encode("a "), ".- /");
        assert_eq!(encode(" "), "/");
    }

    #[test]
    fn test_encode_drops_unmapped() {
        assert_eq!(encode("a@b"), ".- -...");
        assert_eq!(encode("a@"), ".-");
        assert_eq!(encode("@#$"), "");
    }

    #[test]
    fn test_encode_punctuation() {
        assert_eq!(encode(".,?:"), ".-.-.- --..-- ..--.. ---...");
    }

    #[test]
    fn test_encode_hangul() {
        assert_eq!(encode("한글"), ".--- . ..-. .-.. -.. ...-");
        assert_eq!(encode("사과를 사요"), "--. . .-.. ...- -.. ...- / --. . -.- -.");
        assert_eq!(
            encode("구천육백사십일"),
            ".-.. .... -.-. - ..-. -.- .-. .-.. .-- --.- .-.. --. . --. ..- .-- -.- ..- ...-"
        );
    }

    #[test]
    fn test_encode_digraph_vowel() {
        // 계 = ㄱ + ㅖ(ㅕ ㅣ)
        assert_eq!(encode("계"), ".-.. ... ..-");
    }

    #[test]
    fn test_decode_letters() {
        assert_eq!(decode(".-", Language::English), "A");
        assert_eq!(decode("... --- ...", Language::English), "SOS");
        assert_eq!(decode(".- / -...", Language::English), "A B");
    }

    #[test]
    fn test_decode_hangul_keeps_jamo() {
        assert_eq!(decode(".--- . ..-. .-.. -.. ...-", Language::Korean), "ㅎㅏㄴㄱㅡㄹ");
    }

    #[test]
    fn test_decode_drops_unmapped_pattern() {
        assert_eq!(decode(".- ........ -...", Language::English), "AB");
        assert_eq!(decode("--.-", Language::Korean), "ㅐ");
        assert_eq!(decode(".-.-.-.-.-", Language::Korean), "");
    }

    #[test]
    fn test_decode_ignores_other_characters() {
        assert_eq!(decode(".-x -...", Language::English), "AB");
    }

    #[test]
    fn test_decode_abandons_pattern_before_boundary() {
        assert_eq!(decode(".-/ -...", Language::English), " B");
        assert_eq!(decode("-.../", Language::English), " ");
    }

    #[test]
    fn test_decode_with_selector() {
        assert_eq!(decode_with_selector(".- / -...", "EN"), "A B");
        assert_eq!(decode_with_selector(".--- .", "KR"), "ㅎㅏ");
        assert_eq!(decode_with_selector(".- / -... / -.-.", "JP"), "  ");
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(""), "");
        assert_eq!(decode("", Language::English), "");
        assert_eq!(decode("", Language::Korean), "");
    }

    #[test]
    fn test_pattern_of() {
        assert_eq!(pattern_of('a'), Some(".-"));
        assert_eq!(pattern_of('ㅎ'), Some(".---"));
        assert_eq!(pattern_of('A'), None);
        assert_eq!(pattern_of('ㄲ'), None);
    }
}
