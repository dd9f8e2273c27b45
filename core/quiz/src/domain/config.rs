//! 実行設定（既定値 → config.json → コマンドライン の順に上書き）

use crate::domain::tier::DEFAULT_PRODUCTIVITY_THRESHOLD;
use common::domain::{ModelName, VaultRoot};
use common::llm::{ollama, ProviderOptions, ProviderType};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// 解決済みの設定
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    pub vault_path: Option<PathBuf>,
    pub provider: ProviderType,
    pub model_name: ModelName,
    pub base_url: Option<String>,
    pub api_key_env: Option<String>,
    pub temperature: Option<f32>,
    /// None のときタイムアウトなし
    pub request_timeout_secs: Option<u64>,
    pub productivity_threshold: usize,
    /// 苦手分野サマリーをシステム指示に追記する
    pub include_weak_areas: bool,
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            vault_path: None,
            provider: ProviderType::Ollama,
            model_name: ModelName::new(ollama::DEFAULT_MODEL),
            base_url: None,
            api_key_env: None,
            temperature: None,
            request_timeout_secs: None,
            productivity_threshold: DEFAULT_PRODUCTIVITY_THRESHOLD,
            include_weak_areas: false,
            seed: None,
        }
    }
}

/// config.json の中身（全項目省略可）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(alias = "vault")]
    pub vault_path: Option<PathBuf>,
    pub provider: Option<ProviderType>,
    #[serde(alias = "model")]
    pub model_name: Option<String>,
    pub base_url: Option<String>,
    pub api_key_env: Option<String>,
    pub temperature: Option<f32>,
    pub request_timeout_secs: Option<u64>,
    pub productivity_threshold: Option<usize>,
    pub include_weak_areas: Option<bool>,
}

impl FileConfig {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// コマンドラインで指定された上書き
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub vault_path: Option<PathBuf>,
    pub provider: Option<ProviderType>,
    pub model_name: Option<ModelName>,
    pub base_url: Option<String>,
    pub productivity_threshold: Option<usize>,
    pub include_weak_areas: bool,
    pub seed: Option<u64>,
}

impl QuizConfig {
    pub fn apply_file(mut self, file: FileConfig) -> Self {
        if let Some(v) = file.vault_path {
            self.vault_path = Some(v);
        }
        if let Some(p) = file.provider {
            self.provider = p;
        }
        if let Some(m) = file.model_name {
            self.model_name = ModelName::new(m);
        }
        self.base_url = file.base_url.or(self.base_url);
        self.api_key_env = file.api_key_env.or(self.api_key_env);
        self.temperature = file.temperature.or(self.temperature);
        self.request_timeout_secs = file.request_timeout_secs.or(self.request_timeout_secs);
        if let Some(t) = file.productivity_threshold {
            self.productivity_threshold = t;
        }
        if let Some(w) = file.include_weak_areas {
            self.include_weak_areas = w;
        }
        self
    }

    pub fn apply_cli(mut self, cli: CliOverrides) -> Self {
        self.vault_path = cli.vault_path.or(self.vault_path);
        if let Some(p) = cli.provider {
            self.provider = p;
        }
        if let Some(m) = cli.model_name {
            self.model_name = m;
        }
        self.base_url = cli.base_url.or(self.base_url);
        if let Some(t) = cli.productivity_threshold {
            self.productivity_threshold = t;
        }
        // フラグは有効化のみ（config.json の true を打ち消さない）
        self.include_weak_areas |= cli.include_weak_areas;
        self.seed = cli.seed.or(self.seed);
        self
    }

    pub fn vault_root(&self) -> Option<VaultRoot> {
        self.vault_path.clone().map(VaultRoot::new)
    }

    pub fn provider_options(&self) -> ProviderOptions {
        ProviderOptions {
            model: Some(self.model_name.to_string()),
            base_url: self.base_url.clone(),
            api_key_env: self.api_key_env.clone(),
            temperature: self.temperature,
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}
