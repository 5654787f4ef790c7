//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::particle::{Registry, ToleranceStyle};

/// josa 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct JosaConfig {
    /// 끝소리를 판별할 수 없을 때 쓰는 허용 표기 예시 ("이(가)", "(이)가", "가(이)", "(가)이")
    #[serde(default = "default_tolerance_style")]
    pub tolerance_style: String,
}

fn default_tolerance_style() -> String {
    "이(가)".to_string()
}

impl Default for JosaConfig {
    fn default() -> Self {
        Self {
            tolerance_style: default_tolerance_style(),
        }
    }
}

impl JosaConfig {
    /// 허용 표기 스타일 (잘못된 값이면 기본값)
    pub fn tolerance_style(&self, registry: &Registry) -> ToleranceStyle {
        ToleranceStyle::from_form(&self.tolerance_style, registry).unwrap_or_else(|e| {
            log::warn!("허용 표기 설정 무시: {}", e);
            ToleranceStyle::default()
        })
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/josa/config.json (없으면 ~/.config/josa/config.json)
///
/// 두 환경 변수 모두 절대 경로 디렉토리가 아니면 None
pub fn config_path() -> Option<PathBuf> {
    let absolute_dir = |key: &str| {
        std::env::var(key)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))?;
    Some(base.join("josa").join("config.json"))
}

/// 설정 파일 로드 (경로가 없거나 파일 없음, 파싱 실패 시 기본값)
pub fn load_config() -> JosaConfig {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            log::debug!("설정 디렉토리 없음, 기본값 사용");
            JosaConfig::default()
        }
    }
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> JosaConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            JosaConfig::default()
        }),
        Err(_) => JosaConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &JosaConfig) -> Result<(), String> {
    let path = config_path().ok_or("설정 디렉토리를 찾을 수 없음 (XDG_CONFIG_HOME, HOME)")?;
    save_config_to(config, &path)
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &JosaConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
