//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、固定のクイズを返すだけです。
//! モデルサーバーなしでパイプライン全体を動かす確認用に使用します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Echo が返す固定のクイズ本文（Callout 形式）
pub const ECHO_QUIZ: &str = "### 🛡️ Question 1
> [!QUESTION] **[Echo Provider] Which provider produced this quiz?**
> A) ollama
> B) openai_compat
> C) echo
> D) none

> [!SUCCESS]- 🔑 **Click to Reveal Answer**
> **✅ Correct Answer:** C) echo
> **📝 Explanation:** No model was called; the echo provider returns a fixed quiz.
> **🔗 Source:** [[echo]]

---
";

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn model(&self) -> &str {
        "echo"
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut payload = json!({ "query": query });
        if let Some(system) = system_instruction {
            payload["system_instruction"] = json!(system);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 実際の API 呼び出しは行わず、リクエストサイズだけを返す
        Ok(json!({ "echo": { "request_bytes": request_json.len() } }).to_string())
    }

    fn parse_response_text(&self, _response_json: &str) -> Result<Option<String>, Error> {
        Ok(Some(ECHO_QUIZ.to_string()))
    }
}
