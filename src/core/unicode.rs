//! 한글 문자 분류 및 음절 분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스 -> 호환용 자모 (19개)
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 인덱스 -> 호환용 자모 (21개)
#[rustfmt::skip]
const JUNGSEONG_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 인덱스 -> 호환용 자모 (인덱스 0 = 종성 없음)
#[rustfmt::skip]
const JONGSEONG_JAMO: [Option<char>; 28] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 문자 분류 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// 완성형 음절, 호환용 자모, 조합용 자모
    Hangul,
    /// 그 외 모든 문자
    Other,
}

/// 문자가 한글인지 분류
///
/// 완성형 음절(U+AC00~U+D7A3), 호환용 자모(U+3131~U+318E),
/// 조합용 자모(U+1100~U+11FF)를 한글로 본다.
pub fn script_of(c: char) -> Script {
    match c as u32 {
        HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST => Script::Hangul,
        0x3131..=0x318E => Script::Hangul,
        0x1100..=0x11FF => Script::Hangul,
        _ => Script::Other,
    }
}

/// 가(U+AC00) 기준 오프셋에서 자모 위치 인덱스 계산
/// 종성 인덱스 0은 받침 없음, 음절 블록 밖의 문자는 None
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 호환용 자모로 분해된 음절
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub lead: char,
    pub vowel: char,
    /// 받침 (없으면 None)
    pub tail: Option<char>,
}

impl Syllable {
    /// 초성, 중성, 종성 순서로 자모 순회
    pub fn jamo(&self) -> impl Iterator<Item = char> {
        [Some(self.lead), Some(self.vowel), self.tail]
            .into_iter()
            .flatten()
    }
}

/// 완성형 음절을 호환용 자모 2~3개로 분해
/// 완성형 음절이 아니면 None
pub fn split_syllable(c: char) -> Option<Syllable> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    Some(Syllable {
        lead: CHOSEONG_JAMO[cho as usize],
        vowel: JUNGSEONG_JAMO[jung as usize],
        tail: JONGSEONG_JAMO[jong as usize],
    })
}

/// 문자열의 완성형 음절을 모두 자모로 풀어쓴 문자열 반환
/// 음절이 아닌 문자는 그대로 유지
pub fn decompose_str(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for c in input.chars() {
        match split_syllable(c) {
            Some(syllable) => result.extend(syllable.jamo()),
            None => result.push(c),
        }
    }
    result
}
