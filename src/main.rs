//! josa - 단어에 알맞은 한국어 조사를 붙여 출력
//!
//! 사용법: josa [--style <허용 표기>] <단어> <조사>...
//!
//! 조사는 포매터의 암시적 지정과 같은 형식("을", "-이에요")이며,
//! `ko(을)`처럼 쓰면 명시적 지정으로 처리한다.
//! 조사 지정 자리의 `-`로 시작하는 인자는 옵션이 아닌 조사로 읽는다.

use std::process::ExitCode;

use clap::Parser;
use josa::config::load_config;
use josa::{KoreanExtension, ToleranceStyle, REGISTRY};

/// 단어에 알맞은 한국어 조사를 붙여 출력
#[derive(Parser, Debug)]
#[command(name = "josa", version, about, long_about = None)]
struct Args {
    /// 끝소리를 판별할 수 없을 때 쓰는 허용 표기 ("이(가)", "(이)가", "가(이)", "(가)이")
    #[arg(long, value_name = "허용 표기")]
    style: Option<String>,

    /// 조사를 붙일 단어
    word: String,

    /// 조사 지정 ("을", "-이에요", "ko(을)")
    #[arg(required = true, allow_hyphen_values = true)]
    forms: Vec<String>,
}

/// `ko(을)` 형식이면 조사 이름 반환
fn explicit_particle(form: &str) -> Option<&str> {
    form.strip_prefix("ko(")?.strip_suffix(')')
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // 설정 로드 (명령행 스타일이 우선)
    let config = load_config();
    let mut ko = KoreanExtension::from_config(&config);
    if let Some(style) = &args.style {
        match ToleranceStyle::from_form(style, &REGISTRY) {
            Ok(style) => ko = ko.with_tolerance_style(style),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let mut status = ExitCode::SUCCESS;
    for form in &args.forms {
        let result = match explicit_particle(form) {
            Some(particle) => ko.resolve(&args.word, Some(particle), &args.word),
            None => ko.resolve(&args.word, None, form),
        };
        match result {
            Ok(Some(text)) => println!("{}", text),
            Ok(None) => {
                log::warn!("조사 지정으로 처리할 수 없음: {}", form);
                println!("{}", args.word);
            }
            Err(e) => {
                eprintln!("{}", e);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
