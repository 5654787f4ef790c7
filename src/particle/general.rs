//! 일반 규칙을 따르는 조사
//!
//! 받침이 있으면 첫 번째 형태, 없으면 두 번째 형태를 고른다.

use crate::core::ending::WordEnding;

use super::tolerance::{generate_tolerances, pick_tolerance, ToleranceStyle};

/// 조사 뒤에 다른 글자가 이어질 수 있는지 여부
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// 조사 형태만 단독으로 매칭 ("이", "을", "야")
    Terminal,
    /// 뒤따르는 글자를 그대로 붙임 ("은커녕", "에서")
    Attachable,
}

/// 일반 조사 (받침 유무에 따른 두 이형태 또는 불변 형태)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralParticle {
    /// 받침 뒤 형태
    form1: &'static str,
    /// 모음 뒤 형태
    form2: &'static str,
    category: Category,
}

impl GeneralParticle {
    /// 두 이형태를 가진 조사 생성 (기본: 뒤에 글자가 붙을 수 있음)
    pub const fn new(form1: &'static str, form2: &'static str) -> Self {
        Self {
            form1,
            form2,
            category: Category::Attachable,
        }
    }

    /// 형태가 하나뿐인 조사 생성
    pub const fn invariant(form: &'static str) -> Self {
        Self::new(form, form)
    }

    /// 조사 형태만 단독으로 매칭되도록 설정
    pub const fn terminal(mut self) -> Self {
        self.category = Category::Terminal;
        self
    }

    pub fn form1(&self) -> &'static str {
        self.form1
    }

    pub fn form2(&self) -> &'static str {
        self.form2
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// 형태가 하나뿐인지 확인
    pub fn is_invariant(&self) -> bool {
        self.form1 == self.form2
    }

    /// 받침 유무로 이형태 선택
    pub fn select(&self, has_jongseong: bool) -> &'static str {
        if has_jongseong {
            self.form1
        } else {
            self.form2
        }
    }

    /// 허용 표기 목록
    pub fn tolerances(&self) -> Vec<String> {
        generate_tolerances(self.form1, self.form2)
    }

    /// 끝소리에 맞는 형태 (판별 불가면 허용 표기)
    pub fn pick(&self, ending: WordEnding, style: ToleranceStyle) -> String {
        match ending.has_jongseong() {
            Some(has_jongseong) => self.select(has_jongseong).to_string(),
            None => pick_tolerance(self.form1, self.form2, style),
        }
    }

    /// 지정 형태에서 조사 부분을 바꾸고 뒤따르는 글자는 그대로 붙임
    pub fn allomorph(&self, ending: WordEnding, form: &str, style: ToleranceStyle) -> String {
        let mut result = self.pick(ending, style);
        result.push_str(self.trailing(form));
        result
    }

    /// 이 조사가 가진 모든 표면 형태 (긴 것부터)
    pub fn surfaces(&self) -> Vec<String> {
        let mut surfaces = vec![self.form1.to_string()];
        if !self.is_invariant() {
            surfaces.push(self.form2.to_string());
        }
        surfaces.extend(self.tolerances());
        surfaces.sort_by_key(|s| std::cmp::Reverse(s.len()));
        surfaces
    }

    /// 매칭용 정규식 조각
    pub fn pattern(&self) -> String {
        let alternatives: Vec<String> = self.surfaces().iter().map(|s| regex::escape(s)).collect();
        match self.category {
            Category::Terminal => format!("(?:{})$", alternatives.join("|")),
            Category::Attachable => format!("(?:{})", alternatives.join("|")),
        }
    }

    /// 지정 형태에서 조사 뒤에 이어지는 글자
    fn trailing<'a>(&self, form: &'a str) -> &'a str {
        if self.category == Category::Terminal {
            return "";
        }
        self.surfaces()
            .iter()
            .find_map(|s| form.strip_prefix(s.as_str()))
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const I: GeneralParticle = GeneralParticle::new("이", "가").terminal();
    const EUN: GeneralParticle = GeneralParticle::new("은", "는");
    const MAN: GeneralParticle = GeneralParticle::invariant("만");

    #[test]
    fn test_select() {
        assert_eq!(I.select(true), "이");
        assert_eq!(I.select(false), "가");
        assert_eq!(MAN.select(true), "만");
        assert_eq!(MAN.select(false), "만");
    }

    #[test]
    fn test_pick_by_ending() {
        assert_eq!(I.pick(WordEnding::Consonant('ㄹ'), ToleranceStyle::default()), "이");
        assert_eq!(I.pick(WordEnding::Vowel, ToleranceStyle::default()), "가");
        assert_eq!(I.pick(WordEnding::Unknown, ToleranceStyle::default()), "이(가)");
        assert_eq!(I.pick(WordEnding::Unknown, ToleranceStyle::OptionalForm1AndForm2), "(이)가");
        // 불변 조사는 판별 불가여도 그대로
        assert_eq!(MAN.pick(WordEnding::Unknown, ToleranceStyle::default()), "만");
    }

    #[test]
    fn test_attachable_keeps_trailing_text() {
        let style = ToleranceStyle::default();
        assert_eq!(EUN.allomorph(WordEnding::Vowel, "은커녕", style), "는커녕");
        assert_eq!(EUN.allomorph(WordEnding::Consonant('ㄴ'), "는커녕", style), "은커녕");
        assert_eq!(EUN.allomorph(WordEnding::Vowel, "은(는)커녕", style), "는커녕");
        assert_eq!(MAN.allomorph(WordEnding::Vowel, "만큼", style), "만큼");
    }

    #[test]
    fn test_terminal_drops_trailing_text() {
        assert_eq!(I.allomorph(WordEnding::Vowel, "이", ToleranceStyle::default()), "가");
    }

    #[test]
    fn test_surfaces_longest_first() {
        assert_eq!(I.surfaces(), vec!["이(가)", "(이)가", "가(이)", "(가)이", "이", "가"]);
        assert_eq!(MAN.surfaces(), vec!["만"]);
    }

    #[test]
    fn test_pattern() {
        assert_eq!(MAN.pattern(), "(?:만)");
        assert_eq!(
            GeneralParticle::new("아", "야").terminal().pattern(),
            r"(?:아\(야\)|\(아\)야|야\(아\)|\(야\)아|아|야)$"
        );
    }
}
