//! 한국어 조사 모델
//!
//! # 개요
//!
//! 조사는 앞 단어의 끝소리에 따라 형태가 바뀐다 ("피카츄가", "버터플이").
//! 대부분은 받침 유무로 두 형태 중 하나를 고르는 일반 규칙을 따르지만
//! 두 가지 예외가 있다:
//!
//! - **"으로"**: 받침 ㄹ 뒤에서도 "로"를 쓴다 ([`Euro`])
//! - **"이다"**: 활용하는 서술격 조사라 어미에 따라 "이"가 줄거나 합쳐진다 ([`Copula`])
//!
//! # 사용 예시
//!
//! ```
//! use josa::particle::{ToleranceStyle, REGISTRY};
//!
//! let style = ToleranceStyle::default();
//! let particle = REGISTRY.find("을");
//! assert_eq!(particle.inflect("사과", "을", style), "를");
//!
//! // 등록되지 않은 형태는 "이다" 활용으로 처리
//! let copula = REGISTRY.find("이에요");
//! assert_eq!(copula.inflect("피카츄", "이에요", style), "예요");
//! ```

mod copula;
mod euro;
mod general;
mod registry;
mod tolerance;

use std::fmt;

use crate::core::ending::WordEnding;

// 공개 인터페이스
pub use copula::{Contraction, Copula};
pub use euro::Euro;
pub use general::{Category, GeneralParticle};
pub use registry::{default_particles, Registry, REGISTRY};
pub use tolerance::{generate_tolerances, pick_tolerance, ToleranceStyle};

/// 조사 (일반 규칙 또는 두 가지 예외)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Particle {
    /// 받침 유무로 고르는 조사
    General(GeneralParticle),
    /// "으로"
    Euro(Euro),
    /// "이다"
    Copula(Copula),
}

impl Particle {
    /// 끝소리와 지정 형태로 붙일 형태 계산
    pub fn allomorph(&self, ending: WordEnding, form: &str, style: ToleranceStyle) -> String {
        match self {
            Particle::General(p) => p.allomorph(ending, form, style),
            Particle::Euro(p) => p.allomorph(ending, form, style),
            Particle::Copula(p) => p.conjugate(form, ending, style),
        }
    }

    /// 단어 뒤에 붙일 형태 계산
    pub fn inflect(&self, word: &str, form: &str, style: ToleranceStyle) -> String {
        self.allomorph(WordEnding::of(word), form, style)
    }

    /// 매칭용 정규식 조각
    pub fn pattern(&self) -> String {
        match self {
            Particle::General(p) => p.pattern(),
            Particle::Euro(_) => Euro::PATTERN.to_string(),
            Particle::Copula(_) => Copula::PATTERN.to_string(),
        }
    }

    /// 대표 허용 표기 ("이(가)", "(으)로", "(이)")
    pub fn tolerance(&self, style: ToleranceStyle) -> String {
        match self {
            Particle::General(p) => pick_tolerance(p.form1(), p.form2(), style),
            Particle::Euro(p) => p.tolerance(),
            Particle::Copula(p) => p.tolerance(),
        }
    }
}

impl From<GeneralParticle> for Particle {
    fn from(p: GeneralParticle) -> Self {
        Particle::General(p)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tolerance(ToleranceStyle::default()))
    }
}
