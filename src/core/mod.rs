//! 한글 음절 분해와 단어 끝소리 판별

pub mod ending;
pub mod hangul;
