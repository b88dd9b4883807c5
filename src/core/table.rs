//! 모스 부호 심볼 테이블 (영문, 한글 자모)
//!
//! 정방향(문자 -> 부호)과 역방향(부호 -> 문자) 테이블은 처음 사용할 때
//! 한 번 만들어지고 이후 변경되지 않는다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::language::Language;

/// 영문 모스 부호 (ITU)
#[rustfmt::skip]
pub const ENGLISH_TABLE: [(char, &str); 46] = [
    ('a', ".-"),     ('b', "-..."),   ('c', "-.-."),   ('d', "-.."),
    ('e', "."),      ('f', "..-."),   ('g', "--."),    ('h', "...."),
    ('i', ".."),     ('j', ".---"),   ('k', "-.-"),    ('l', ".-.."),
    ('m', "--"),     ('n', "-."),     ('o', "---"),    ('p', ".--."),
    ('q', "--.-"),   ('r', ".-."),    ('s', "..."),    ('t', "-"),
    ('u', "..-"),    ('v', "...-"),   ('w', ".--"),    ('x', "-..-"),
    ('y', "-.--"),   ('z', "--.."),
    ('1', ".----"),  ('2', "..---"),  ('3', "...--"),  ('4', "....-"),
    ('5', "....."),  ('6', "-...."),  ('7', "--..."),  ('8', "---.."),
    ('9', "----."),  ('0', "-----"),
    ('?', "..--.."), ('!', "-.-.--"), ('.', ".-.-.-"), (',', "--..--"),
    (';', "-.-.-."), (':', "---..."), ('+', ".-.-."),  ('-', "-....-"),
    ('/', "-..-."),  ('=', "-...-"),
];

/// 한글 모스 부호 (SKATS)
/// ㅖ, ㅒ는 ㅕ+ㅣ, ㅑ+ㅣ 두 부호로 보낸다
#[rustfmt::skip]
pub const KOREAN_TABLE: [(char, &str); 28] = [
    // 자음
    ('ㄱ', ".-.."), ('ㄴ', "..-."), ('ㄷ', "-..."), ('ㄹ', "...-"),
    ('ㅁ', "--"),   ('ㅂ', ".--"),  ('ㅅ', "--."),  ('ㅇ', "-.-"),
    ('ㅈ', ".--."), ('ㅊ', "-.-."), ('ㅋ', "-..-"), ('ㅌ', "--.."),
    ('ㅍ', "---"),  ('ㅎ', ".---"),
    // 모음
    ('ㅏ', "."),    ('ㅑ', ".."),   ('ㅓ', "-"),    ('ㅕ', "..."),
    ('ㅗ', ".-"),   ('ㅛ', "-."),   ('ㅜ', "...."), ('ㅠ', ".-."),
    ('ㅡ', "-.."),  ('ㅣ', "..-"),  ('ㅔ', "-.--"), ('ㅐ', "--.-"),
    ('ㅖ', "... ..-"), ('ㅒ', ".. ..-"),
];

/// 문자 -> 부호 테이블
pub type ForwardTable = HashMap<char, &'static str>;
/// 부호 -> 문자 테이블
pub type InverseTable = HashMap<&'static str, char>;

fn build_forward(entries: &[(char, &'static str)]) -> ForwardTable {
    entries.iter().copied().collect()
}

/// 한 토큰으로 표현되는 부호만 역변환 테이블에 넣는다
/// (공백을 포함한 두 토큰짜리 부호는 복호화 시 토큰 단위로 풀린다)
fn build_inverse(entries: &[(char, &'static str)]) -> InverseTable {
    entries
        .iter()
        .filter(|(_, pattern)| is_single_token(pattern))
        .map(|&(c, pattern)| (pattern, c))
        .collect()
}

/// `.`과 `-`로만 이루어진 비어 있지 않은 부호인지
pub fn is_single_token(pattern: &str) -> bool {
    !pattern.is_empty() && pattern.chars().all(|c| c == '.' || c == '-')
}

lazy_static! {
    static ref ENGLISH_FORWARD: ForwardTable = build_forward(&ENGLISH_TABLE);
    static ref KOREAN_FORWARD: ForwardTable = build_forward(&KOREAN_TABLE);
    static ref ENGLISH_INVERSE: InverseTable = build_inverse(&ENGLISH_TABLE);
    static ref KOREAN_INVERSE: InverseTable = build_inverse(&KOREAN_TABLE);
}

/// 언어별 정방향 테이블
pub fn forward_table(lang: Language) -> &'static ForwardTable {
    match lang {
        Language::English => &ENGLISH_FORWARD,
        Language::Korean => &KOREAN_FORWARD,
    }
}

/// 언어별 역방향 테이블
pub fn inverse_table(lang: Language) -> &'static InverseTable {
    match lang {
        Language::English => &ENGLISH_INVERSE,
        Language::Korean => &KOREAN_INVERSE,
    }
}
