//! 조사 선택 과정에서 발생하는 에러

/// josa 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JosaError {
    /// 완성형 한글 한 글자가 아닌 입력
    InvalidSyllable(String),
    /// 자모 표에 없는 자모
    InvalidJamo(char),
    /// 등록된 조사 중 해당 형태를 가진 조사가 없음
    UnknownParticle(String),
    /// 허용 표기 스타일로 쓸 수 없는 형태
    InvalidToleranceStyle(String),
    /// 조사 패턴 조합 실패
    InvalidPattern(String),
}

impl std::fmt::Display for JosaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JosaError::InvalidSyllable(s) => write!(f, "한글 음절이 아닙니다: {:?}", s),
            JosaError::InvalidJamo(c) => write!(f, "알 수 없는 자모: {:?}", c),
            JosaError::UnknownParticle(s) => write!(f, "등록되지 않은 조사: {:?}", s),
            JosaError::InvalidToleranceStyle(s) => {
                write!(f, "일반 조사의 허용 표기가 아닙니다: {:?}", s)
            }
            JosaError::InvalidPattern(s) => write!(f, "조사 패턴 오류: {}", s),
        }
    }
}

impl std::error::Error for JosaError {}
