//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::echo::EchoProvider;
use crate::llm::ollama::OllamaProvider;
use crate::llm::openai_compat::OpenAiCompatProvider;
use crate::llm::provider::LlmProvider;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    /// Ollama ネイティブ API (/api/chat)
    #[default]
    Ollama,
    /// OpenAI Chat Completions 互換 (/chat/completions)
    #[serde(rename = "openai_compat", alias = "openai", alias = "gpt")]
    OpenAiCompat,
    /// Echo（固定のクイズを返すだけ）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ollama" => Some(Self::Ollama),
            "openai_compat" | "openai" | "gpt" => Some(Self::OpenAiCompat),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::OpenAiCompat => "openai_compat",
            Self::Echo => "echo",
        }
    }

    /// 利用可能なプロバイダ名
    pub fn names() -> &'static [&'static str] {
        &["ollama", "openai_compat", "echo"]
    }
}

/// プロバイダ生成時のオプション（None は各プロバイダのデフォルト）
#[derive(Debug, Clone, Default)]
pub struct ProviderOptions {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_key_env: Option<String>,
    pub temperature: Option<f32>,
    pub timeout: Option<Duration>,
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    Ollama(OllamaProvider),
    OpenAiCompat(OpenAiCompatProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Ollama(p) => p.name(),
            Self::OpenAiCompat(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn model(&self) -> &str {
        match self {
            Self::Ollama(p) => p.model(),
            Self::OpenAiCompat(p) => p.model(),
            Self::Echo(p) => p.model(),
        }
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        match self {
            Self::Ollama(p) => p.make_request_payload(query, system_instruction),
            Self::OpenAiCompat(p) => p.make_request_payload(query, system_instruction),
            Self::Echo(p) => p.make_request_payload(query, system_instruction),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Ollama(p) => p.make_http_request(request_json),
            Self::OpenAiCompat(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Ollama(p) => p.parse_response_text(response_json),
            Self::OpenAiCompat(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成
pub fn create_provider(provider_type: ProviderType, opts: ProviderOptions) -> AnyProvider {
    match provider_type {
        ProviderType::Ollama => AnyProvider::Ollama(OllamaProvider::new(
            opts.model,
            opts.base_url,
            opts.temperature,
            opts.timeout,
        )),
        ProviderType::OpenAiCompat => AnyProvider::OpenAiCompat(OpenAiCompatProvider::new(
            opts.model,
            opts.base_url,
            opts.api_key_env,
            opts.temperature,
            opts.timeout,
        )),
        ProviderType::Echo => AnyProvider::Echo(EchoProvider::new()),
    }
}
