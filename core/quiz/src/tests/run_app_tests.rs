use common::adapter::{FileJsonLog, NoopLog, StdClock, StdFileSystem};
use common::domain::Dirs;
use common::error::Error;
use common::llm::echo::ECHO_QUIZ;
use common::llm::ProviderType;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use crate::adapter::RecordingProgress;
use crate::cli::{parse_args_from, Config};
use crate::domain::report::{local_date_string, report_path};
use crate::domain::CliOverrides;
use crate::ports::inbound::RunQuizApp;
use crate::wiring::App;

/// 設定・状態ディレクトリを一時ディレクトリに向ける EnvResolver
struct TempEnvResolver {
    dirs: Dirs,
}

impl EnvResolver for TempEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        Ok(self.dirs.clone())
    }
}

struct Fixture {
    home: TempDir,
    vault: TempDir,
    progress: Arc<RecordingProgress>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            vault: TempDir::new().unwrap(),
            progress: Arc::new(RecordingProgress::default()),
        }
    }

    fn dirs(&self) -> Dirs {
        Dirs {
            config_dir: self.home.path().join("config"),
            state_dir: self.home.path().join("state"),
        }
    }

    fn app(&self, logger: Arc<dyn Log>) -> App {
        App {
            fs: Arc::new(StdFileSystem),
            clock: Arc::new(StdClock),
            env_resolver: Arc::new(TempEnvResolver { dirs: self.dirs() }),
            progress: self.progress.clone(),
            logger,
            completion: None,
        }
    }

    fn run(&self, config: Config) -> Result<i32, Error> {
        let runner = crate::Runner {
            app: self.app(Arc::new(NoopLog)),
        };
        runner.run(config)
    }

    fn write_note(&self, name: &str, text: &str) {
        fs::write(self.vault.path().join(name), text).unwrap();
    }

    fn write_config(&self, json: &str) {
        let dir = self.dirs().config_dir;
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.json"), json).unwrap();
    }

    fn echo_config(&self) -> Config {
        Config {
            overrides: CliOverrides {
                vault_path: Some(self.vault.path().to_path_buf()),
                provider: Some(ProviderType::Echo),
                seed: Some(1),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn today_report(&self) -> PathBuf {
        report_path(self.vault.path(), &local_date_string(StdClock.now_ms()))
    }
}

#[test]
fn test_run_app_with_help() {
    let f = Fixture::new();
    let config = Config {
        help: true,
        ..Default::default()
    };
    assert_eq!(f.run(config).unwrap(), 0);
}

#[test]
fn test_run_app_without_vault() {
    let f = Fixture::new();
    let err = f.run(Config::default()).unwrap_err();
    assert!(err.to_string().contains("No vault configured"));
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_missing_vault_dir() {
    let f = Fixture::new();
    let mut config = f.echo_config();
    config.overrides.vault_path = Some(f.vault.path().join("does-not-exist"));
    let err = f.run(config).unwrap_err();
    assert!(err.to_string().contains("Vault path not found"));
    assert_eq!(err.exit_code(), 66);
}

#[test]
fn test_run_app_with_echo_provider_writes_report() {
    let f = Fixture::new();
    f.write_note("ports.md", "SSH listens on 22. DNS uses 53.");
    f.write_note("Daily Quiz - 2000-01-01.md", "old quiz #missed");

    assert_eq!(f.run(f.echo_config()).unwrap(), 0);

    let content = fs::read_to_string(f.today_report()).unwrap();
    assert!(content.contains("**Sources:** ports.md\n"));
    assert!(content.ends_with(ECHO_QUIZ));
    assert!(f.progress.contains("Generating Exam Questions with echo"));
}

#[test]
fn test_run_app_empty_vault() {
    let f = Fixture::new();
    assert_eq!(f.run(f.echo_config()).unwrap(), 0);
    assert!(f.progress.contains("No notes found to process."));
    assert!(!f.today_report().exists());
}

#[test]
fn test_run_app_dry_run_writes_nothing() {
    let f = Fixture::new();
    f.write_note("a.md", "alpha");
    let mut config = f.echo_config();
    config.dry_run = true;
    assert_eq!(f.run(config).unwrap(), 0);
    assert!(!f.today_report().exists());
}

#[test]
fn test_run_app_reads_config_file() {
    let f = Fixture::new();
    f.write_note("a.md", "alpha");
    f.write_config(&format!(
        r#"{{"vault_path": {}, "provider": "echo"}}"#,
        serde_json::to_string(&f.vault.path()).unwrap()
    ));
    assert_eq!(f.run(Config::default()).unwrap(), 0);
    assert!(f.today_report().exists());
}

#[test]
fn test_run_app_config_selects_openai_compat_provider() {
    let f = Fixture::new();
    f.write_note("a.md", "alpha");
    f.write_config(&format!(
        r#"{{"vault_path": {}, "provider": "openai_compat", "model": "qwen2.5", "base_url": "http://127.0.0.1:9/v1"}}"#,
        serde_json::to_string(&f.vault.path()).unwrap()
    ));
    let runner = crate::Runner {
        app: f.app(Arc::new(NoopLog)),
    };

    let resolved = runner.resolve_config(&Config::default()).unwrap();
    assert_eq!(resolved.provider, ProviderType::OpenAiCompat);
    assert_eq!(&*resolved.model_name, "qwen2.5");

    // dry-run は LLM を呼ばないのでエンドポイントが無くても通る
    let config = Config {
        dry_run: true,
        ..Default::default()
    };
    assert_eq!(runner.run(config).unwrap(), 0);
    assert!(!f.today_report().exists());
}

#[test]
fn test_run_app_invalid_config_file() {
    let f = Fixture::new();
    f.write_config(r#"{"vault_path": "/tmp", "colour": "blue"}"#);
    let err = f.run(f.echo_config()).unwrap_err();
    assert!(err.to_string().contains("config.json"));
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn test_run_app_explicit_config_missing() {
    let f = Fixture::new();
    let mut config = f.echo_config();
    config.config_path = Some(f.home.path().join("nope.json"));
    let err = f.run(config).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
    assert_eq!(err.exit_code(), 66);
}

#[test]
fn test_run_app_parsed_args() {
    let f = Fixture::new();
    f.write_note("a.md", "alpha");
    let vault = f.vault.path().to_string_lossy().into_owned();
    let config = parse_args_from(&["daily-quiz", "--vault", &vault, "-p", "echo", "--seed", "3"])
        .unwrap();
    assert_eq!(f.run(config).unwrap(), 0);
    assert!(f.today_report().exists());
}

#[test]
fn test_run_app_logs_lifecycle_to_jsonl() {
    let f = Fixture::new();
    let log_file = f.dirs().log_file();
    let fs_port: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let runner = crate::Runner {
        app: f.app(Arc::new(FileJsonLog::new(fs_port, log_file.clone()))),
    };
    let config = Config {
        help: true,
        ..Default::default()
    };
    runner.run(config).unwrap();

    let lines = fs::read_to_string(&log_file).unwrap();
    let records: Vec<serde_json::Value> = lines
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["message"], "command started");
    assert_eq!(records[0]["fields"]["command"], "help");
    assert_eq!(records[1]["message"], "command finished");
    assert_eq!(records[1]["fields"]["exit_code"], 0);
    assert_eq!(records[0]["layer"], "cli");
}
