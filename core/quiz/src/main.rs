mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, Config};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{QuizCommand, QuizConfig};
use ports::inbound::RunQuizApp;
use usecase::app::{RunOptions, RunOutcome};
use wiring::{wire_app, wire_use_case, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }

    /// 既定値 → config.json → コマンドライン の順に設定を解決する
    fn resolve_config(&self, config: &Config) -> Result<QuizConfig, Error> {
        let fs = self.app.fs.as_ref();
        let file = match &config.config_path {
            Some(path) => {
                if !fs.exists(path) {
                    return Err(Error::not_found(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                adapter::load_file_config(fs, path)?
            }
            None => match self.app.env_resolver.resolve_dirs() {
                Ok(dirs) => adapter::load_file_config(fs, &dirs.config_file())?,
                Err(_) => None,
            },
        };
        let resolved = QuizConfig::default()
            .apply_file(file.unwrap_or_default())
            .apply_cli(config.overrides.clone());
        self.log(
            LogRecord::new(LogLevel::Debug, "config resolved")
                .kind("config")
                .field("provider", resolved.provider.as_str())
                .field("model", resolved.model_name.to_string())
                .field("threshold", resolved.productivity_threshold)
                .field("include_weak_areas", resolved.include_weak_areas),
        );
        Ok(resolved)
    }

    fn generate(&self, config: &Config, dry_run: bool) -> Result<i32, Error> {
        let quiz_config = self.resolve_config(config)?;
        let vault = quiz_config.vault_root().ok_or_else(|| {
            Error::invalid_argument(
                "No vault configured. Use --vault <dir> or set vault_path in config.json.",
            )
        })?;
        let opts = RunOptions {
            vault,
            productivity_threshold: quiz_config.productivity_threshold,
            include_weak_areas: quiz_config.include_weak_areas,
            seed: quiz_config.seed,
            dry_run,
        };
        let use_case = wire_use_case(&self.app, &quiz_config);
        match use_case.run(&opts)? {
            RunOutcome::DryRun { prompt, sources } => {
                println!("Sources: {}", sources.join(", "));
                println!("--- system ---");
                println!("{}", prompt.system);
                println!("--- user ---");
                println!("{}", prompt.user);
            }
            RunOutcome::Written { .. } | RunOutcome::NothingToProcess => {}
        }
        Ok(0)
    }
}

impl RunQuizApp for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config);
        self.log(
            LogRecord::new(LogLevel::Info, "command started")
                .kind("lifecycle")
                .field("command", cmd.name()),
        );

        let result = match cmd {
            QuizCommand::Help => {
                print_help();
                Ok(0)
            }
            QuizCommand::Generate => self.generate(&config, false),
            QuizCommand::DryRun => self.generate(&config, true),
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        self.log(
            LogRecord::new(LogLevel::Info, "command finished")
                .kind("lifecycle")
                .field("command", cmd.name())
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.log(LogRecord::new(LogLevel::Error, e.to_string()).kind("error"));
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("daily-quiz: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = parse_args()?;
    let app = wire_app(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: daily-quiz [options]");
}

fn print_help() {
    println!("Usage: daily-quiz [options]");
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("      --vault <dir>         Notes vault root directory");
    println!("  -p, --provider <provider> LLM provider: ollama (default), openai_compat, echo");
    println!("  -m, --model <model>       Model name. Default: llama3.2-vision");
    println!("      --base-url <url>      Model service base URL. Default: http://localhost:11434");
    println!("      --threshold <words>   Words written in the last 24h above which 8 questions");
    println!("                            are generated instead of 5. Default: 500");
    println!("      --seed <n>            Seed note selection for a reproducible run");
    println!("      --with-weak-areas     Tell the model how many recent quizzes were tagged #missed");
    println!("      --config <file>       Read settings from this config.json");
    println!("      --dry-run             Print the prompt; do not call the model or write a report");
    println!("  -v, --verbose             Echo structured log records to stderr");
    println!();
    println!("Environment:");
    println!("  QUIZ_HOME       Home directory. Config: $QUIZ_HOME/config/config.json;");
    println!("                  logs: $QUIZ_HOME/state/logs/daily-quiz.jsonl");
    println!("                  If unset, $XDG_CONFIG_HOME/daily-quiz and $XDG_STATE_HOME/daily-quiz");
    println!("                  (or ~/.config/daily-quiz and ~/.local/state/daily-quiz) are used.");
    println!();
    println!("Description:");
    println!("  Samples notes edited in the last 24 hours plus older notes, asks the model for a");
    println!("  multiple-choice quiz, and saves it as \"Daily Quiz - <YYYY-MM-DD>.md\" in the vault.");
    println!("  A quiz from earlier the same day is overwritten.");
    println!();
    println!("Examples:");
    println!("  daily-quiz --vault ~/Obsidian");
    println!("  daily-quiz --vault ~/Obsidian -m mistral --with-weak-areas");
    println!("  daily-quiz --vault ~/Obsidian -p echo --dry-run");
}
