//! Ollama ネイティブ API (/api/chat) プロバイダ
//!
//! ローカルで動く Ollama サーバーに非ストリーミングでリクエストし、`message.content` を返す。

use crate::error::Error;
use crate::llm::http::{error_message, post_json};
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.2-vision";

/// Ollama プロバイダ
pub struct OllamaProvider {
    model: String,
    base_url: String,
    temperature: Option<f64>,
    timeout: Option<Duration>,
}

impl OllamaProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき DEFAULT_MODEL）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `temperature` - 温度（None のときサーバー側のデフォルト）
    /// * `timeout` - リクエストのタイムアウト（None のとき無制限）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        temperature: Option<f32>,
        timeout: Option<Duration>,
    ) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            model,
            base_url,
            temperature: temperature.map(f64::from),
            timeout,
        }
    }

    fn url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

impl LlmProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
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

        let mut payload = json!({
            "model": self.model,
            "messages": messages,
            "stream": false
        });
        if let Some(t) = self.temperature {
            payload["options"] = json!({ "temperature": t });
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        post_json(&self.url(), request_json, None, self.timeout)
            .map_err(|e| Error::http(format!("Ollama error: {}", e)))
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(msg) = error_message(&v) {
            return Err(Error::http(format!("Ollama error: {}", msg)));
        }

        Ok(v["message"]["content"].as_str().map(|s| s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> OllamaProvider {
        OllamaProvider::new(None, Some("http://localhost:11434/".to_string()), None, None)
    }

    #[test]
    fn test_defaults() {
        let p = provider();
        assert_eq!(p.name(), "ollama");
        assert_eq!(p.model(), DEFAULT_MODEL);
        assert_eq!(p.url(), "http://localhost:11434/api/chat");
    }

    #[test]
    fn test_make_request_payload_system_then_user() {
        let p = provider();
        let payload = p
            .make_request_payload("GENERATE THE EXAM NOW.", Some("You are an exam creator"))
            .unwrap();
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(payload["stream"], false);
        assert_eq!(payload["model"], "llama3.2-vision");
        assert!(payload.get("options").is_none());
    }

    #[test]
    fn test_make_request_payload_with_temperature() {
        let p = OllamaProvider::new(Some("mistral".to_string()), None, Some(0.5), None);
        let payload = p.make_request_payload("q", None).unwrap();
        assert_eq!(payload["model"], "mistral");
        assert_eq!(payload["options"]["temperature"], 0.5);
        assert_eq!(payload["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_response_text() {
        let p = provider();
        let body = serde_json::json!({
            "model": "llama3.2-vision",
            "message": {"role": "assistant", "content": "### Question 1"},
            "done": true
        })
        .to_string();
        assert_eq!(
            p.parse_response_text(&body).unwrap().as_deref(),
            Some("### Question 1")
        );
    }

    #[test]
    fn test_parse_response_error_field() {
        let p = provider();
        let err = p
            .parse_response_text(r#"{"error":"model \"x\" not found"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_parse_response_malformed() {
        let p = provider();
        let err = p.parse_response_text("not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
