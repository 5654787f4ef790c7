//! 서술격 조사 "이다"
//!
//! "이다"는 활용하는 조사라서 정해진 형태 목록이 없다.
//! 어미 첫 음절을 아래 축약 분류 표에 맞춰 나누고,
//! 단어의 받침 유무에 따라 어간 "이"를 붙이거나 줄인다.
//!
//! | 분류 | 어미 첫 음절 | 모음 뒤 | 받침 뒤 |
//! |---|---|---|---|
//! | 어간 포함 | 입, 인, 일, 임 | 그대로 | 그대로 |
//! | 축약 가능 | 어, 었, 에 | 여, 였, 예 | 이 + 그대로 |
//! | 축약됨 | 여, 였, 예 | 그대로 | 이 + 어, 었, 에 |
//! | 일반 | 다, 라서, 고 | 그대로 | 이 + 그대로 |

use crate::core::ending::WordEnding;
use crate::core::hangul::{decompose, join_phonemes};

use super::tolerance::{pick_tolerance, ToleranceStyle};

/// 어간 "이"와 반모음 /j/로 합쳐지는 모음 쌍 (단모음, 이중모음)
const GLIDES: [(char, char); 2] = [('ㅓ', 'ㅕ'), ('ㅔ', 'ㅖ')];

/// 어미 첫 음절의 축약 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contraction {
    /// 어미가 이미 어간 "이"를 포함 ("입니다")
    StemBearing,
    /// 모음 뒤에서 "이"와 합쳐짐 ("에요" -> "예요")
    Contractible,
    /// 이미 합쳐진 형태, 받침 뒤에서 풀어씀 ("였습니다" -> "이었습니다")
    Contracted,
    /// 받침 뒤에서만 "이"가 붙음 ("다", "라서")
    Plain,
}

impl Contraction {
    /// 어미 첫 글자로 분류
    pub fn classify(lead: char) -> Self {
        let syllable = match decompose(lead) {
            Ok(syllable) if syllable.choseong == Some('ㅇ') => syllable,
            _ => return Contraction::Plain,
        };
        let vowel = syllable.jungseong;
        if vowel == 'ㅣ' {
            Contraction::StemBearing
        } else if GLIDES.iter().any(|&(plain, _)| plain == vowel) {
            Contraction::Contractible
        } else if GLIDES.iter().any(|&(_, glided)| glided == vowel) {
            Contraction::Contracted
        } else {
            Contraction::Plain
        }
    }
}

/// 서술격 조사 "이다"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Copula;

impl Copula {
    /// 어간 "이"
    const FORM1: &'static str = "이";
    const FORM2: &'static str = "";

    /// 매칭용 정규식 조각 (어떤 어미든 받음)
    pub const PATTERN: &'static str = r".+";

    /// 단어 끝소리에 맞게 어미 활용
    ///
    /// ```
    /// use josa::core::ending::WordEnding;
    /// use josa::particle::{Copula, ToleranceStyle};
    /// let style = ToleranceStyle::default();
    /// assert_eq!(Copula.conjugate("이에요", WordEnding::Vowel, style), "예요");
    /// assert_eq!(Copula.conjugate("이에요", WordEnding::Consonant('ㄹ'), style), "이에요");
    /// ```
    pub fn conjugate(&self, form: &str, ending: WordEnding, style: ToleranceStyle) -> String {
        let suffix = strip_stem(form);
        let stem = self.stem(ending, style);
        let lead = match suffix.chars().next() {
            Some(lead) => lead,
            None => return stem,
        };
        let rest = &suffix[lead.len_utf8()..];

        match Contraction::classify(lead) {
            Contraction::StemBearing => suffix,
            Contraction::Contractible if ending == WordEnding::Vowel => {
                format!("{}{}", glide(lead, true), rest)
            }
            Contraction::Contracted if ending != WordEnding::Vowel => {
                format!("{}{}{}", stem, glide(lead, false), rest)
            }
            Contraction::Contracted => suffix,
            Contraction::Contractible | Contraction::Plain => stem + &suffix,
        }
    }

    /// 어간 "이"의 이형태 ("이", "", "(이)")
    fn stem(&self, ending: WordEnding, style: ToleranceStyle) -> String {
        match ending.has_jongseong() {
            Some(true) => Self::FORM1.to_string(),
            Some(false) => Self::FORM2.to_string(),
            None => pick_tolerance(Self::FORM1, Self::FORM2, style),
        }
    }

    /// 대표 형태 "(이)"
    pub fn tolerance(&self) -> String {
        self.stem(WordEnding::Unknown, ToleranceStyle::default())
    }
}

/// 앞의 "이"와 모든 "(이)"를 제거
fn strip_stem(form: &str) -> String {
    form.strip_prefix("이").unwrap_or(form).replace("(이)", "")
}

/// 첫 음절의 모음을 이중모음으로 바꾸거나(`contract`) 단모음으로 되돌림
fn glide(lead: char, contract: bool) -> char {
    let syllable = match decompose(lead) {
        Ok(syllable) => syllable,
        Err(_) => return lead,
    };
    let vowel = GLIDES.iter().find_map(|&(plain, glided)| match contract {
        true if plain == syllable.jungseong => Some(glided),
        false if glided == syllable.jungseong => Some(plain),
        _ => None,
    });
    match vowel {
        Some(vowel) => join_phonemes('ㅇ', vowel, syllable.jongseong).unwrap_or(lead),
        None => lead,
    }
}
