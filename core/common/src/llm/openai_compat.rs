//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイントを指定可能（Ollama の /v1、llama.cpp server 等）。

use crate::error::Error;
use crate::llm::http::{error_message, post_json};
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
const DEFAULT_TEMPERATURE: f64 = 0.7;

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    model: String,
    base_url: String,
    api_key_env: Option<String>,
    temperature: f64,
    timeout: Option<Duration>,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき Ollama と同じ既定モデル）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key_env` - API キーを読む環境変数名（None のとき Authorization を付けない）
    /// * `temperature` - 温度（None のとき DEFAULT_TEMPERATURE）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
        temperature: Option<f32>,
        timeout: Option<Duration>,
    ) -> Self {
        let model = model.unwrap_or_else(|| crate::llm::ollama::DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let temperature = temperature.map(f64::from).unwrap_or(DEFAULT_TEMPERATURE);
        Self {
            model,
            base_url,
            api_key_env,
            temperature,
            timeout,
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn auth_header(&self) -> Option<String> {
        self.api_key_env.as_ref().and_then(|name| {
            env::var(name).ok().map(|key| format!("Bearer {}", key))
        })
    }
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut messages: Vec<Value> = Vec::new();
        if let Some(s) = system_instruction {
            messages.push(json!({ "role": "system", "content": s }));
        }
        messages.push(json!({ "role": "user", "content": query }));

        Ok(json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "stream": false
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        post_json(&self.url(), request_json, self.auth_header(), self.timeout)
            .map_err(|e| Error::http(format!("Chat completions error: {}", e)))
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(msg) = error_message(&v) {
            return Err(Error::http(format!("API error: {}", msg)));
        }

        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}
