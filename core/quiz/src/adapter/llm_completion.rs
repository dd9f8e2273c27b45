//! 単発 LLM 完了の標準実装（LlmProvider でリクエストを組み立て、応答テキストを返す）

use common::error::Error;
use common::llm::LlmProvider;

use crate::ports::outbound::LlmCompletion;

/// LlmProvider を LlmCompletion に合わせるアダプタ
pub struct ProviderCompletion<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> ProviderCompletion<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: LlmProvider> LlmCompletion for ProviderCompletion<P> {
    fn describe(&self) -> String {
        format!("{} ({})", self.provider.name(), self.provider.model())
    }

    fn complete(&self, system_instruction: &str, user_message: &str) -> Result<String, Error> {
        let payload = self
            .provider
            .make_request_payload(user_message, Some(system_instruction))?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.provider.make_http_request(&request_json)?;
        self.provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| {
                Error::json(format!(
                    "Malformed response from {}: no message content",
                    self.provider.name()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::llm::echo::{EchoProvider, ECHO_QUIZ};
    use common::llm::ollama::OllamaProvider;
    use serde_json::Value;
    use std::time::Duration;

    #[test]
    fn test_echo_completion() {
        let c = ProviderCompletion::new(EchoProvider::new());
        assert_eq!(c.describe(), "echo (echo)");
        assert_eq!(c.complete("sys", "user").unwrap(), ECHO_QUIZ);
    }

    /// 応答に content が無いプロバイダ
    struct EmptyProvider;

    impl LlmProvider for EmptyProvider {
        fn name(&self) -> &str {
            "empty"
        }
        fn model(&self) -> &str {
            "m"
        }
        fn make_request_payload(&self, _q: &str, _s: Option<&str>) -> Result<Value, Error> {
            Ok(Value::Null)
        }
        fn make_http_request(&self, _r: &str) -> Result<String, Error> {
            Ok("{}".to_string())
        }
        fn parse_response_text(&self, _r: &str) -> Result<Option<String>, Error> {
            Ok(None)
        }
    }

    #[test]
    fn test_missing_content_is_malformed() {
        let err = ProviderCompletion::new(EmptyProvider).complete("s", "u").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("no message content"));
    }

    #[test]
    fn test_unreachable_ollama_is_http_error() {
        let p = OllamaProvider::new(
            None,
            Some("http://127.0.0.1:9".to_string()),
            None,
            Some(Duration::from_secs(2)),
        );
        let err = ProviderCompletion::new(p).complete("s", "u").unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
