//! 단어 끝소리 판별
//!
//! 조사의 이형태는 단어 마지막 음절의 받침으로 결정된다.
//! 끝에 붙은 괄호 주석("(Lv.25)")이나 문장부호는 읽지 않는 글자로 보고 건너뛰며,
//! 숫자로 끝나는 단어는 한국어로 읽었을 때의 마지막 음절을 기준으로 한다.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_general_category::{get_general_category, GeneralCategory};

use super::hangul::decompose;

lazy_static! {
    /// 단어 끝의 십진수
    static ref DECIMAL_PATTERN: Regex = Regex::new(r"[0-9]+(\.[0-9]+)?$").unwrap();
}

/// 숫자 0~9의 한국어 읽기
const DIGITS: [&str; 10] = ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

/// 10의 거듭제곱 단위 (지수, 읽기)
#[rustfmt::skip]
const UNITS: [(usize, &str); 22] = [
    (1, "십"), (2, "백"), (3, "천"), (4, "만"),
    (8, "억"), (12, "조"), (16, "경"), (20, "해"),
    (24, "자"), (28, "양"), (32, "구"), (36, "간"),
    (40, "정"), (44, "재"), (48, "극"), (52, "항하사"),
    (56, "아승기"), (60, "나유타"), (64, "불가사의"), (68, "무량대수"),
    (72, "겁"), (76, "업"),
];

/// 읽을 수 있는 단위를 넘어서는 첫 지수
const UNREADABLE_EXP: usize = 80;

/// 단어의 끝소리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordEnding {
    /// 받침으로 끝남 (받침 자모)
    Consonant(char),
    /// 받침 없이 모음으로 끝남
    Vowel,
    /// 한글이 아니어서 판별 불가
    Unknown,
}

impl WordEnding {
    /// 단어의 끝소리 판별
    pub fn of(word: &str) -> Self {
        let word = pick_significant(word);
        if let Some(m) = DECIMAL_PATTERN.find(word) {
            return read_decimal(m.as_str());
        }
        word.chars()
            .last()
            .map_or(WordEnding::Unknown, WordEnding::from_letter)
    }

    /// 한 글자의 끝소리
    pub fn from_letter(c: char) -> Self {
        match decompose(c) {
            Ok(syllable) => match syllable.jongseong {
                Some(jong) => WordEnding::Consonant(jong),
                None => WordEnding::Vowel,
            },
            Err(_) => WordEnding::Unknown,
        }
    }

    /// 받침 유무 (판별 불가면 None)
    pub fn has_jongseong(&self) -> Option<bool> {
        match self {
            WordEnding::Consonant(_) => Some(true),
            WordEnding::Vowel => Some(false),
            WordEnding::Unknown => None,
        }
    }
}

/// 단어 끝의 읽지 않는 글자를 제거
///
/// ```
/// use josa::core::ending::pick_significant;
/// assert_eq!(pick_significant("넥슨(코리아)"), "넥슨");
/// assert_eq!(pick_significant("메이플스토리..."), "메이플스토리");
/// ```
pub fn pick_significant(word: &str) -> &str {
    let mut end = word.len();
    while let Some(c) = word[..end].chars().next_back() {
        let start = end - c.len_utf8();
        if c == ')' {
            // 짝이 맞는 괄호 묶음은 중첩까지 통째로 건너뜀
            end = matching_open_paren(&word[..start]).unwrap_or(start);
            continue;
        }
        if is_insignificant(c) {
            end = start;
            continue;
        }
        break;
    }
    &word[..end]
}

/// 끝의 `)`를 뗀 문자열에서 그 `)`와 짝이 되는 `(`의 위치
fn matching_open_paren(head: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in head.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' if depth == 0 => return Some(i),
            '(' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// 발음되지 않는 글자인지 확인 (문장부호 P*, 구분자 Z*, 수정 기호 Sk)
fn is_insignificant(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | SpaceSeparator
            | LineSeparator
            | ParagraphSeparator
            | ModifierSymbol
    )
}

/// 십진수를 한국어로 읽었을 때의 끝소리
fn read_decimal(decimal: &str) -> WordEnding {
    if let Some((_, fraction)) = decimal.split_once('.') {
        // 소수는 마지막 자릿수를 그대로 읽음 ("1.5" -> 일 점 오)
        return read_digit(fraction);
    }
    let digits = decimal.trim_start_matches('0');
    if digits.is_empty() {
        return read_digit("0");
    }
    let significant = digits.trim_end_matches('0');
    let exp = digits.len() - significant.len();
    if exp >= UNREADABLE_EXP {
        return WordEnding::Unknown;
    }
    match UNITS.iter().rev().find(|(unit_exp, _)| *unit_exp <= exp) {
        Some((_, unit)) => last_letter_ending(unit),
        None => read_digit(significant),
    }
}

fn read_digit(digits: &str) -> WordEnding {
    digits
        .chars()
        .last()
        .and_then(|d| d.to_digit(10))
        .map_or(WordEnding::Unknown, |d| last_letter_ending(DIGITS[d as usize]))
}

fn last_letter_ending(reading: &str) -> WordEnding {
    reading
        .chars()
        .last()
        .map_or(WordEnding::Unknown, WordEnding::from_letter)
}
