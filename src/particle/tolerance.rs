//! 허용 표기 ("이(가)", "(으)로")
//!
//! 끝소리를 판별할 수 없는 단어에는 두 이형태를 함께 적은 허용 표기를 붙인다.

use crate::error::JosaError;

use super::registry::Registry;
use super::Particle;

/// 네 가지 허용 표기 중 어떤 순서를 쓸지 결정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToleranceStyle {
    /// 이(가)
    #[default]
    Form1AndOptionalForm2,
    /// (이)가
    OptionalForm1AndForm2,
    /// 가(이)
    Form2AndOptionalForm1,
    /// (가)이
    OptionalForm2AndForm1,
}

impl ToleranceStyle {
    const ALL: [ToleranceStyle; 4] = [
        ToleranceStyle::Form1AndOptionalForm2,
        ToleranceStyle::OptionalForm1AndForm2,
        ToleranceStyle::Form2AndOptionalForm1,
        ToleranceStyle::OptionalForm2AndForm1,
    ];

    /// `generate_tolerances` 결과에서의 위치
    pub fn index(self) -> usize {
        self as usize
    }

    /// 허용 표기 예시로 스타일 결정
    ///
    /// ```
    /// use josa::particle::{ToleranceStyle, REGISTRY};
    /// assert_eq!(
    ///     ToleranceStyle::from_form("(은)는", &REGISTRY),
    ///     Ok(ToleranceStyle::OptionalForm1AndForm2)
    /// );
    /// ```
    pub fn from_form(form: &str, registry: &Registry) -> Result<Self, JosaError> {
        let invalid = || JosaError::InvalidToleranceStyle(form.to_string());
        let particle = match registry.get(form) {
            Ok(Particle::General(p)) => p,
            _ => return Err(invalid()),
        };
        let tolerances = particle.tolerances();
        if tolerances.len() != Self::ALL.len() {
            return Err(invalid());
        }
        tolerances
            .iter()
            .position(|t| t == form)
            .map(|i| Self::ALL[i])
            .ok_or_else(invalid)
    }
}

/// 두 이형태로 만들 수 있는 허용 표기를 모두 생성
///
/// - 같은 형태: 없음
/// - 한쪽이 빈 형태: "(이)"
/// - 긴 형태가 짧은 형태로 끝남: "(이)면"
/// - 그 외: "이(가)", "(이)가", "가(이)", "(가)이"
pub fn generate_tolerances(form1: &str, form2: &str) -> Vec<String> {
    if form1 == form2 {
        return Vec::new();
    }
    if form1.is_empty() || form2.is_empty() {
        let form = if form1.is_empty() { form2 } else { form1 };
        return vec![format!("({})", form)];
    }
    if form1.chars().count() != form2.chars().count() {
        let (longer, shorter) = if form1.len() > form2.len() {
            (form1, form2)
        } else {
            (form2, form1)
        };
        if let Some(head) = longer.strip_suffix(shorter) {
            return vec![format!("({}){}", head, shorter)];
        }
    }
    vec![
        format!("{}({})", form1, form2),
        format!("({}){}", form1, form2),
        format!("{}({})", form2, form1),
        format!("({}){}", form2, form1),
    ]
}

/// 스타일에 맞는 허용 표기 하나를 선택
/// 네 가지 표기가 없는 조사는 스타일과 무관하게 유일한 표기를 쓴다
pub fn pick_tolerance(form1: &str, form2: &str, style: ToleranceStyle) -> String {
    let mut tolerances = generate_tolerances(form1, form2);
    match tolerances.len() {
        0 => form1.to_string(),
        4 => tolerances.swap_remove(style.index()),
        _ => tolerances.swap_remove(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::REGISTRY;

    #[test]
    fn test_generate_tolerances() {
        assert_eq!(
            generate_tolerances("이", "가"),
            vec!["이(가)", "(이)가", "가(이)", "(가)이"]
        );
        assert_eq!(generate_tolerances("이면", "면"), vec!["(이)면"]);
        assert_eq!(generate_tolerances("이시여", "시여"), vec!["(이)시여"]);
        assert_eq!(generate_tolerances("으", ""), vec!["(으)"]);
        assert!(generate_tolerances("의", "의").is_empty());
    }

    #[test]
    fn test_pick_tolerance() {
        assert_eq!(pick_tolerance("을", "를", ToleranceStyle::default()), "을(를)");
        assert_eq!(pick_tolerance("을", "를", ToleranceStyle::OptionalForm2AndForm1), "(를)을");
        // 허용 표기가 하나뿐이면 스타일 무시
        assert_eq!(pick_tolerance("이여", "여", ToleranceStyle::Form2AndOptionalForm1), "(이)여");
        assert_eq!(pick_tolerance("만", "만", ToleranceStyle::OptionalForm1AndForm2), "만");
    }

    #[test]
    fn test_style_from_form() {
        assert_eq!(
            ToleranceStyle::from_form("이(가)", &REGISTRY),
            Ok(ToleranceStyle::Form1AndOptionalForm2)
        );
        assert_eq!(
            ToleranceStyle::from_form("(를)을", &REGISTRY),
            Ok(ToleranceStyle::OptionalForm2AndForm1)
        );
        assert_eq!(
            ToleranceStyle::from_form("와(과)", &REGISTRY),
            Ok(ToleranceStyle::Form2AndOptionalForm1)
        );
    }

    #[test]
    fn test_style_from_invalid_form() {
        // 허용 표기가 아닌 형태
        assert!(matches!(
            ToleranceStyle::from_form("이", &REGISTRY),
            Err(JosaError::InvalidToleranceStyle(_))
        ));
        // 허용 표기가 하나뿐인 조사
        assert!(ToleranceStyle::from_form("(이)여", &REGISTRY).is_err());
        assert!(ToleranceStyle::from_form("(으)로", &REGISTRY).is_err());
        assert!(ToleranceStyle::from_form("냐옹", &REGISTRY).is_err());
    }
}
