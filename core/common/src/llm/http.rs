//! ブロッキング HTTP の共通処理（POST JSON とエラーメッセージ抽出）

use crate::error::Error;
use serde_json::Value;
use std::time::Duration;

/// エラーレスポンスからメッセージを取り出す
///
/// `{"error": "..."}`（Ollama）と `{"error": {"message": "..."}}`（OpenAI 互換）の両方に対応。
pub fn error_message(v: &Value) -> Option<String> {
    let err = v.get("error")?;
    if let Some(s) = err.as_str() {
        return Some(s.to_string());
    }
    Some(
        err["message"]
            .as_str()
            .unwrap_or("Unknown error")
            .to_string(),
    )
}

/// JSON を POST して本文を返す。2xx 以外は Error::http。
///
/// timeout が None の場合はタイムアウトしない。
pub fn post_json(
    url: &str,
    body: &str,
    authorization: Option<String>,
    timeout: Option<Duration>,
) -> Result<String, Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

    let mut builder = client
        .post(url)
        .header("Content-Type", "application/json")
        .body(body.to_string());
    if let Some(auth) = authorization {
        builder = builder.header("Authorization", auth);
    }

    let response = builder
        .send()
        .map_err(|e| Error::http(format!("HTTP request to {} failed: {}", url, e)))?;

    let status = response.status();
    let response_text = response
        .text()
        .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        let msg = serde_json::from_str::<Value>(&response_text)
            .ok()
            .and_then(|v| error_message(&v))
            .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text));
        return Err(Error::http(msg));
    }

    Ok(response_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_string_form() {
        let v = json!({"error": "model 'nope' not found, try pulling it first"});
        assert_eq!(
            error_message(&v).as_deref(),
            Some("model 'nope' not found, try pulling it first")
        );
    }

    #[test]
    fn test_error_message_object_form() {
        let v = json!({"error": {"message": "invalid key", "type": "auth"}});
        assert_eq!(error_message(&v).as_deref(), Some("invalid key"));
    }

    #[test]
    fn test_error_message_absent() {
        assert!(error_message(&json!({"message": {}})).is_none());
    }

    #[test]
    fn test_post_json_connection_refused_is_http_error() {
        // 予約済みポート 9 (discard) は通常 listen されていない
        let err = post_json(
            "http://127.0.0.1:9/api/chat",
            "{}",
            None,
            Some(Duration::from_secs(2)),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert_eq!(err.exit_code(), 74);
    }
}
