//! 유니코드 한글 음절 조합/분해 유틸리티

use crate::error::JosaError;

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 자모 (인덱스 순)
#[rustfmt::skip]
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 자모 (인덱스 순)
#[rustfmt::skip]
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 자모 (종성 인덱스 1~27에 대응, 0 = 종성 없음은 제외)
#[rustfmt::skip]
pub const JONGSEONG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 분해된 한글 음절
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// 초성 (분해 시 생략을 요청하면 None)
    pub choseong: Option<char>,
    /// 중성
    pub jungseong: char,
    /// 종성 (받침 없으면 None)
    pub jongseong: Option<char>,
}

impl Syllable {
    /// 받침이 있는지 확인
    pub fn has_jongseong(&self) -> bool {
        self.jongseong.is_some()
    }
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_hangul(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 한글 한 글자를 자모로 분해
///
/// `letter`는 정확히 한 글자의 완성형 한글이어야 한다.
/// `with_choseong`이 false면 초성 계산을 생략하고 None으로 둔다.
pub fn split_phonemes(letter: &str, with_choseong: bool) -> Result<Syllable, JosaError> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => split_char(c, with_choseong),
        _ => Err(JosaError::InvalidSyllable(letter.to_string())),
    }
}

/// 한글 문자를 자모로 분해 (초성 포함)
pub fn decompose(c: char) -> Result<Syllable, JosaError> {
    split_char(c, true)
}

fn split_char(c: char, with_choseong: bool) -> Result<Syllable, JosaError> {
    let (cho, jung, jong) =
        decompose_syllable(c).ok_or_else(|| JosaError::InvalidSyllable(c.to_string()))?;
    Ok(Syllable {
        choseong: with_choseong.then(|| CHOSEONG[cho as usize]),
        jungseong: JUNGSEONG[jung as usize],
        jongseong: (jong > 0).then(|| JONGSEONG[jong as usize - 1]),
    })
}

/// 자모로 한글 한 글자 조합
pub fn join_phonemes(
    choseong: char,
    jungseong: char,
    jongseong: Option<char>,
) -> Result<char, JosaError> {
    let cho = index_of(&CHOSEONG, choseong)?;
    let jung = index_of(&JUNGSEONG, jungseong)?;
    let jong = match jongseong {
        Some(c) => index_of(&JONGSEONG, c)? + 1,
        None => 0,
    };
    compose_syllable(cho, jung, jong).ok_or(JosaError::InvalidJamo(choseong))
}

/// `Syllable`을 다시 한 글자로 조합 (초성이 생략된 경우 에러)
pub fn compose(syllable: &Syllable) -> Result<char, JosaError> {
    let choseong = syllable
        .choseong
        .ok_or_else(|| JosaError::InvalidSyllable(format!("{:?}", syllable)))?;
    join_phonemes(choseong, syllable.jungseong, syllable.jongseong)
}

fn index_of(table: &[char], c: char) -> Result<u32, JosaError> {
    table
        .iter()
        .position(|&t| t == c)
        .map(|i| i as u32)
        .ok_or(JosaError::InvalidJamo(c))
}
