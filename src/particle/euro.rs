//! "으로" 조사
//!
//! 받침 ㄹ 뒤에서는 "로"를 쓰는 예외가 있고,
//! "으로서", "으로부터"처럼 뒤에 다른 조사가 이어질 수 있다.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::ending::WordEnding;

use super::tolerance::{pick_tolerance, ToleranceStyle};

lazy_static! {
    /// 앞의 "으" 또는 "(으)"와 "로"
    static ref PREFIX_PATTERN: Regex = Regex::new(r"^(?:으|\(으\))?로").unwrap();
}

/// "으로" 조사
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Euro;

impl Euro {
    /// 받침 뒤 매개모음
    const FORM1: &'static str = "으";
    const FORM2: &'static str = "";

    /// 매칭용 정규식 조각
    pub const PATTERN: &'static str = r"(?:으|\(으\))?로";

    /// 끝소리에 맞는 "으로"/"로"/"(으)로" 선택
    pub fn select(&self, ending: WordEnding, style: ToleranceStyle) -> String {
        let prefix = match ending {
            WordEnding::Consonant(jong) if jong != 'ㄹ' => Self::FORM1.to_string(),
            WordEnding::Consonant(_) | WordEnding::Vowel => Self::FORM2.to_string(),
            WordEnding::Unknown => pick_tolerance(Self::FORM1, Self::FORM2, style),
        };
        prefix + "로"
    }

    /// 지정 형태의 "으로" 부분만 바꾸고 뒤의 글자는 유지
    pub fn allomorph(&self, ending: WordEnding, form: &str, style: ToleranceStyle) -> String {
        let suffix = match PREFIX_PATTERN.find(form) {
            Some(m) => &form[m.end()..],
            None => {
                log::debug!("'으로'로 시작하지 않는 형태: {}", form);
                ""
            }
        };
        self.select(ending, style) + suffix
    }

    /// 대표 형태 "(으)로"
    pub fn tolerance(&self) -> String {
        self.select(WordEnding::Unknown, ToleranceStyle::default())
    }
}
