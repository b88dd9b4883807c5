//! hanmorse - 한글/영문 모스 부호 변환기

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hanmorse::config::{load_config, load_config_from, MorseConfig};
use hanmorse::{decode, encode, to_signals, Language};

#[derive(Parser)]
#[command(name = "hanmorse")]
#[command(about = "Korean/English text <-> Morse code", long_about = None)]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/hanmorse/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to Morse code
    Encode {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Convert Morse code to text
    Decode {
        /// Code sequence, quoted as one argument (e.g. ".--- .")
        #[arg(allow_hyphen_values = true)]
        code: String,
        /// Language to decode into (EN or KR)
        #[arg(short, long)]
        lang: Option<Language>,
    },
    /// Print the keying sequence for text
    Signals {
        #[arg(required = true)]
        text: Vec<String>,
        /// Print configured sound files instead of element names
        #[arg(long, default_value_t = false)]
        files: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 로깅 초기화 (기본 warn, -v면 debug)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result =
        resolve_config(cli.config.as_deref()).and_then(|config| run(cli.command, &config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("hanmorse: {}", msg);
            ExitCode::FAILURE
        }
    }
}

/// `--config`가 주어지면 그 파일을 반드시 읽고, 없으면 기본 경로에서 읽는다
fn resolve_config(path: Option<&Path>) -> Result<MorseConfig, String> {
    match path {
        Some(path) => load_config_from(path).map_err(|e| format!("{}: {}", path.display(), e)),
        None => Ok(load_config()),
    }
}

fn run(command: Command, config: &MorseConfig) -> Result<(), String> {
    match command {
        Command::Encode { text } => {
            println!("{}", encode(&text.join(" ")));
        }
        Command::Decode { code, lang } => {
            let lang = lang.unwrap_or(config.default_lang);
            log::debug!("decoding as {}", lang);
            println!("{}", decode(&code, lang));
        }
        Command::Signals { text, files } => {
            let signals = to_signals(&encode(&text.join(" ")));
            if files {
                let paths = config.sounds.sequence(&signals).ok_or_else(|| {
                    let missing: Vec<&str> = config
                        .sounds
                        .missing(&signals)
                        .iter()
                        .map(|s| s.name())
                        .collect();
                    format!("no sound file configured for: {}", missing.join(", "))
                })?;
                for path in paths {
                    println!("{}", path.display());
                }
            } else {
                for signal in signals {
                    println!("{}", signal.name());
                }
            }
        }
    }
    Ok(())
}
