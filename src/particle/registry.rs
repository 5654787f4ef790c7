//! 조사 레지스트리
//!
//! 등록된 모든 조사의 정규식 조각을 이름 붙은 그룹(`_0`, `_1`, ...)으로 묶어
//! 하나의 정규식으로 만든다. 선택지는 등록 순서대로 시도되므로
//! 겹치는 형태가 있으면 먼저 등록된 조사가 이긴다.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::JosaError;

use super::{Copula, Euro, GeneralParticle, Particle};

lazy_static! {
    /// 잘 알려진 조사들의 기본 레지스트리
    pub static ref REGISTRY: Registry = Registry::new(
        default_particles(),
        Particle::Copula(Copula),
    )
    .expect("기본 조사 패턴은 항상 유효함");
}

/// 기본 조사 목록 (등록 순서 = 우선순위)
pub fn default_particles() -> Vec<Particle> {
    vec![
        // 일반 규칙
        GeneralParticle::new("이", "가").terminal().into(),
        GeneralParticle::new("을", "를").terminal().into(),
        GeneralParticle::new("은", "는").into(), // "은(는)커녕"
        GeneralParticle::new("과", "와").into(),
        // 호격 조사
        GeneralParticle::new("아", "야").terminal().into(),
        GeneralParticle::new("이여", "여").terminal().into(),
        GeneralParticle::new("이시여", "시여").terminal().into(),
        // 불변 조사
        GeneralParticle::invariant("의").terminal().into(),
        GeneralParticle::invariant("도").terminal().into(),
        GeneralParticle::invariant("만").into(),
        GeneralParticle::invariant("에").into(),
        GeneralParticle::invariant("께").into(),
        GeneralParticle::invariant("뿐").into(),
        GeneralParticle::invariant("하").into(),
        GeneralParticle::invariant("보다").into(),
        GeneralParticle::invariant("밖에").into(),
        GeneralParticle::invariant("같이").into(),
        GeneralParticle::invariant("부터").into(),
        GeneralParticle::invariant("까지").into(),
        GeneralParticle::invariant("마저").into(),
        GeneralParticle::invariant("조차").into(),
        GeneralParticle::invariant("마냥").into(),
        GeneralParticle::invariant("처럼").into(),
        GeneralParticle::invariant("커녕").into(),
        // 예외 규칙
        Particle::Euro(Euro),
    ]
}

/// 조사 레지스트리
#[derive(Debug)]
pub struct Registry {
    /// 등록된 조사 (순서 = 우선순위)
    particles: Vec<Particle>,
    /// 매칭되지 않을 때 쓰는 조사
    default: Particle,
    /// 앞부분 매칭 (`find`)
    prefix_pattern: Regex,
    /// 전체 매칭 (`get`)
    exact_pattern: Regex,
}

impl Registry {
    /// 조사 목록으로 레지스트리 생성
    pub fn new(particles: Vec<Particle>, default: Particle) -> Result<Self, JosaError> {
        let alternatives = particles
            .iter()
            .enumerate()
            .map(|(i, p)| format!("(?P<{}>{})", group_name(i), p.pattern()))
            .collect::<Vec<_>>()
            .join("|");
        let compile = |source: String| {
            Regex::new(&source).map_err(|e| JosaError::InvalidPattern(e.to_string()))
        };
        let prefix_pattern = compile(format!("^(?:{})", alternatives))?;
        let exact_pattern = compile(format!("^(?:{})$", alternatives))?;

        Ok(Self {
            particles,
            default,
            prefix_pattern,
            exact_pattern,
        })
    }

    /// 정확히 해당 형태를 가진 조사 (명시적 지정에 사용)
    pub fn get(&self, form: &str) -> Result<&Particle, JosaError> {
        self.exact_pattern
            .captures(form)
            .and_then(|caps| self.particle_by_captures(&caps))
            .ok_or_else(|| JosaError::UnknownParticle(form.to_string()))
    }

    /// 앞부분이 맞는 조사, 없으면 기본 조사 (암시적 지정에 사용)
    pub fn find(&self, form: &str) -> &Particle {
        match self
            .prefix_pattern
            .captures(form)
            .and_then(|caps| self.particle_by_captures(&caps))
        {
            Some(particle) => particle,
            None => {
                log::debug!("매칭되는 조사 없음, 기본 조사 사용: {}", form);
                &self.default
            }
        }
    }

    /// 등록된 조사 목록
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// 기본 조사
    pub fn default_particle(&self) -> &Particle {
        &self.default
    }

    fn particle_by_captures(&self, caps: &Captures<'_>) -> Option<&Particle> {
        (0..self.particles.len())
            .find(|&i| caps.name(&group_name(i)).is_some())
            .map(|i| &self.particles[i])
    }
}

fn group_name(index: usize) -> String {
    format!("_{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ToleranceStyle;

    fn general(form1: &'static str, form2: &'static str) -> Particle {
        GeneralParticle::new(form1, form2).into()
    }

    #[test]
    fn test_get_exact_forms() {
        let i_ga = Particle::from(GeneralParticle::new("이", "가").terminal());
        assert_eq!(REGISTRY.get("이").unwrap(), &i_ga);
        assert_eq!(REGISTRY.get("를").unwrap().to_string(), "을(를)");
        assert_eq!(REGISTRY.get("(은)는").unwrap().to_string(), "은(는)");
        assert_eq!(REGISTRY.get("으로").unwrap(), &Particle::Euro(Euro));
        assert_eq!(REGISTRY.get("(으)로").unwrap(), &Particle::Euro(Euro));
        assert_eq!(REGISTRY.get("여").unwrap().to_string(), "(이)여");
        assert_eq!(REGISTRY.get("시여").unwrap().to_string(), "(이)시여");
    }

    #[test]
    fn test_get_unknown_particle() {
        assert_eq!(
            REGISTRY.get("냐옹"),
            Err(JosaError::UnknownParticle("냐옹".to_string()))
        );
        assert!(REGISTRY.get("").is_err());
        // 기본 조사는 레지스트리에 등록된 조사가 아님
        assert!(REGISTRY.get("이다").is_err());
        // 명시적 지정은 뒤따르는 글자를 허용하지 않음
        assert!(REGISTRY.get("은커녕").is_err());
    }

    #[test]
    fn test_find_falls_back_to_copula() {
        for form in ["이다", "다", "이에요", "입니다", "였습니다", "냐옹", "", "Pikachu"] {
            assert_eq!(REGISTRY.find(form), &Particle::Copula(Copula), "{}", form);
        }
    }

    #[test]
    fn test_find_terminal_requires_full_form() {
        assert_eq!(REGISTRY.find("이").to_string(), "이(가)");
        assert_eq!(REGISTRY.find("야").to_string(), "아(야)");
        assert_eq!(REGISTRY.find("이여").to_string(), "(이)여");
        assert_eq!(REGISTRY.find("이시여").to_string(), "(이)시여");
        // "이"로 시작하지만 이/가 조사가 아님
        assert_eq!(REGISTRY.find("이야"), &Particle::Copula(Copula));
    }

    #[test]
    fn test_find_attachable_prefix() {
        assert_eq!(REGISTRY.find("은커녕").to_string(), "은(는)");
        assert_eq!(REGISTRY.find("으로부터"), &Particle::Euro(Euro));
        assert_eq!(REGISTRY.find("만큼").to_string(), "만");
    }

    #[test]
    fn test_registration_order_is_priority() {
        // 같은 형태를 가진 두 조사 중 먼저 등록된 쪽이 선택됨
        let registry = Registry::new(
            vec![general("은", "는"), GeneralParticle::invariant("은").into()],
            Particle::Copula(Copula),
        )
        .unwrap();
        assert_eq!(registry.find("은"), &registry.particles()[0]);

        let reversed = Registry::new(
            vec![GeneralParticle::invariant("은").into(), general("은", "는")],
            Particle::Copula(Copula),
        )
        .unwrap();
        assert_eq!(reversed.find("은"), &reversed.particles()[0]);
        assert_eq!(reversed.find("는"), &reversed.particles()[1]);
    }

    #[test]
    fn test_registered_copula_matches_any_ending() {
        // 서술격 조사를 마지막 선택지로 등록하면 나머지 모든 형태를 받음
        let registry = Registry::new(
            vec![
                GeneralParticle::new("을", "를").terminal().into(),
                Particle::Copula(Copula),
            ],
            GeneralParticle::invariant("의").into(),
        )
        .unwrap();
        assert_eq!(registry.find("를").to_string(), "을(를)");
        assert_eq!(registry.find("이에요"), &Particle::Copula(Copula));
        assert_eq!(registry.get("였다").unwrap(), &Particle::Copula(Copula));
        // 빈 형태는 어떤 조사와도 맞지 않음
        assert!(registry.get("").is_err());
        assert_eq!(registry.find("").to_string(), "의");

        let style = ToleranceStyle::default();
        let copula = registry.get("이에요").unwrap();
        assert_eq!(copula.inflect("피카츄", "이에요", style), "예요");
    }

    #[test]
    fn test_default_particle() {
        assert_eq!(REGISTRY.default_particle(), &Particle::Copula(Copula));
        let style = ToleranceStyle::default();
        assert_eq!(REGISTRY.find("이다").inflect("버터플", "이다", style), "이다");
    }
}
