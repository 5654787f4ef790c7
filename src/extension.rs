//! 템플릿 포매터 확장
//!
//! 포매터는 이 확장에 필드마다 (값, 조사 이름, 서식)을 넘긴다.
//!
//! - 명시적 지정 `{:ko(을):*{}*}`: 조사 이름은 `Some("을")`, 서식은 이미 렌더링된 인자 (`*사과*`)
//! - 암시적 지정 `{:을}`, `{:-을}`: 조사 이름은 `None`, 서식은 필드 지정 문자열 그대로

use crate::config::JosaConfig;
use crate::error::JosaError;
use crate::particle::{Registry, ToleranceStyle, REGISTRY};

/// 포매터에 등록할 확장 이름 (명시적 "ko", 암시적 "")
pub const NAMES: [&str; 2] = ["ko", ""];

/// 조사만 출력하도록 요청하는 암시적 지정 접두사
const SUFFIX_ONLY_PREFIX: char = '-';

/// 한국어 조사 확장
#[derive(Debug, Clone, Copy)]
pub struct KoreanExtension<'r> {
    registry: &'r Registry,
    tolerance_style: ToleranceStyle,
}

impl Default for KoreanExtension<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl KoreanExtension<'static> {
    /// 기본 레지스트리로 확장 생성
    pub fn new() -> Self {
        Self::with_registry(&REGISTRY)
    }

    /// 설정 파일 값으로 확장 생성
    pub fn from_config(config: &JosaConfig) -> Self {
        Self::new().with_tolerance_style(config.tolerance_style(&REGISTRY))
    }
}

impl<'r> KoreanExtension<'r> {
    /// 레지스트리를 지정하여 확장 생성
    pub fn with_registry(registry: &'r Registry) -> Self {
        Self {
            registry,
            tolerance_style: ToleranceStyle::default(),
        }
    }

    /// 허용 표기 스타일 설정
    pub fn with_tolerance_style(mut self, style: ToleranceStyle) -> Self {
        self.tolerance_style = style;
        self
    }

    pub fn tolerance_style(&self) -> ToleranceStyle {
        self.tolerance_style
    }

    /// 필드 하나를 처리
    ///
    /// 포매터가 확장에 넘기는 세 값에 대응한다.
    ///
    /// - `word`: 필드 값. 끝소리를 판별할 단어
    /// - `particle`: 명시적 지정 `{0:ko(을)}`의 괄호 안 조사. 없으면 `None`
    /// - `format`: 포맷 명세를 적용해 렌더링된 인자. 명시적 지정이면 단어 자리에
    ///   그대로 출력되고, 암시적 지정 `{0:을}`이면 명세 문자열 자체("을", "-이에요")
    ///
    /// 반환값이 `Ok(None)`이면 이 확장이 처리하지 않는 필드이므로
    /// 포매터가 다른 확장을 시도해야 한다. 명시적 지정의 조사를 모르면
    /// `JosaError::UnknownParticle`.
    ///
    /// ```
    /// use josa::KoreanExtension;
    /// let ko = KoreanExtension::new();
    /// assert_eq!(ko.resolve("사과", Some("을"), "*사과*").unwrap().as_deref(), Some("*사과*를"));
    /// assert_eq!(ko.resolve("피카츄", None, "아").unwrap().as_deref(), Some("피카츄야"));
    /// assert_eq!(ko.resolve("수박", None, "-을").unwrap().as_deref(), Some("을"));
    /// ```
    pub fn resolve(
        &self,
        word: &str,
        particle: Option<&str>,
        format: &str,
    ) -> Result<Option<String>, JosaError> {
        let (form, prefix) = match particle {
            Some(form) => {
                let particle = self.registry.get(form)?;
                let suffix = particle.inflect(word, form, self.tolerance_style);
                return Ok(Some(format!("{}{}", format, suffix)));
            }
            None => match format.strip_prefix(SUFFIX_ONLY_PREFIX) {
                Some(form) => (form, ""),
                None => (format, word),
            },
        };

        if !is_implicit_form(form) {
            log::debug!("암시적 조사 지정이 아님: {:?}", format);
            return Ok(None);
        }
        let particle = self.registry.find(form);
        let suffix = particle.inflect(word, form, self.tolerance_style);
        Ok(Some(format!("{}{}", prefix, suffix)))
    }

    /// 단어에 조사를 붙인 결과 (암시적 지정과 같은 규칙)
    pub fn attach(&self, word: &str, form: &str) -> String {
        let suffix = self.registry.find(form).inflect(word, form, self.tolerance_style);
        format!("{}{}", word, suffix)
    }
}

/// 암시적 지정으로 쓸 수 있는 형태인지 확인 (한글과 괄호만)
fn is_implicit_form(form: &str) -> bool {
    !form.is_empty()
        && form
            .chars()
            .all(|c| crate::core::hangul::is_hangul(c) || c == '(' || c == ')')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn implicit(word: &str, form: &str) -> String {
        KoreanExtension::new()
            .resolve(word, None, form)
            .unwrap()
            .unwrap()
    }

    fn explicit(word: &str, form: &str, rendered: &str) -> String {
        KoreanExtension::new()
            .resolve(word, Some(form), rendered)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_explicit() {
        assert_eq!(explicit("피카츄", "아", "피카츄"), "피카츄야");
        assert_eq!(explicit("버터플", "아", "버터플"), "버터플아");
        assert_eq!(explicit("사과", "을", "*사과*"), "*사과*를");
        // 렌더링된 인자가 비어 있으면 조사만
        assert_eq!(explicit("수박", "을", ""), "을");
    }

    #[test]
    fn test_explicit_unknown_particle() {
        let result = KoreanExtension::new().resolve("피카츄", Some("냐옹"), "피카츄");
        assert_eq!(result, Err(JosaError::UnknownParticle("냐옹".to_string())));
    }

    #[test]
    fn test_implicit() {
        assert_eq!(implicit("고라파덕", "아"), "고라파덕아");
        assert_eq!(implicit("사과", "을"), "사과를");
        assert_eq!(implicit("수박", "-을"), "을");
        assert_eq!(implicit("피카츄", "-이에요"), "예요");
    }

    #[test]
    fn test_implicit_not_handled() {
        let ko = KoreanExtension::new();
        assert_eq!(ko.resolve("피카츄", None, ""), Ok(None));
        assert_eq!(ko.resolve("피카츄", None, "-"), Ok(None));
        assert_eq!(ko.resolve("피카츄", None, "is"), Ok(None));
        assert_eq!(ko.resolve("피카츄", None, "0.2f"), Ok(None));
    }

    #[test]
    fn test_tolerance_style() {
        let ko = KoreanExtension::new().with_tolerance_style(ToleranceStyle::OptionalForm1AndForm2);
        assert_eq!(ko.attach("Pikachu", "이"), "Pikachu(이)가");
        assert_eq!(KoreanExtension::new().attach("Pikachu", "이"), "Pikachu이(가)");
    }

    #[test]
    fn test_from_config() {
        let config = JosaConfig {
            tolerance_style: "가(이)".to_string(),
        };
        let ko = KoreanExtension::from_config(&config);
        assert_eq!(ko.tolerance_style(), ToleranceStyle::Form2AndOptionalForm1);
        assert_eq!(ko.attach("Pikachu", "을"), "Pikachu를(을)");
    }
}
