use crate::domain::{CliOverrides, QuizCommand};
use clap::builder::ArgAction;
use clap::value_parser;
use common::domain::ModelName;
use common::error::Error;
use common::llm::ProviderType;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログレコードの要点を stderr にも出す
    pub verbose: bool,
    /// --dry-run: プロンプトを表示して終了（LLM を呼ばない・書き込まない）
    pub dry_run: bool,
    /// --config: config.json の場所を明示する
    pub config_path: Option<PathBuf>,
    pub overrides: CliOverrides,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("daily-quiz")
        .about("Generate a daily multiple-choice quiz from your notes vault with a local LLM")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Echo structured log records to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Print the assembled prompt and exit without calling the model")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("with-weak-areas")
                .long("with-weak-areas")
                .help("Append the #missed summary of the last 7 days to the system instruction")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("vault")
                .long("vault")
                .value_name("dir")
                .help("Notes vault root directory")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("config")
                .long("config")
                .value_name("file")
                .help("Path to config.json")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("provider")
                .help("LLM provider (ollama, openai_compat, echo)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Model name (e.g. llama3.2-vision)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("base-url")
                .long("base-url")
                .value_name("url")
                .help("Base URL of the model service")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("threshold")
                .long("threshold")
                .value_name("words")
                .help("Words written in the last 24h above which the larger quiz is generated")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("seed")
                .long("seed")
                .value_name("n")
                .help("Seed for note selection (reproducible runs)")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let provider = match matches.get_one::<String>("provider") {
        Some(s) => Some(ProviderType::from_str(s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown provider '{}'. Available: {}",
                s,
                ProviderType::names().join(", ")
            ))
        })?),
        None => None,
    };

    Ok(Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        dry_run: matches.get_flag("dry-run"),
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        overrides: CliOverrides {
            vault_path: matches.get_one::<PathBuf>("vault").cloned(),
            provider,
            model_name: matches
                .get_one::<String>("model")
                .map(|s| ModelName::new(s.clone())),
            base_url: matches.get_one::<String>("base-url").cloned(),
            productivity_threshold: matches.get_one::<usize>("threshold").copied(),
            include_weak_areas: matches.get_flag("with-weak-areas"),
            seed: matches.get_one::<u64>("seed").copied(),
        },
    })
}

/// コマンドラインを解析する。
pub fn parse_args() -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    matches_to_config(&matches)
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    matches_to_config(&matches)
}

/// Config を QuizCommand に変換する
pub fn config_to_command(config: &Config) -> QuizCommand {
    if config.help {
        return QuizCommand::Help;
    }
    if config.dry_run {
        return QuizCommand::DryRun;
    }
    QuizCommand::Generate
}
