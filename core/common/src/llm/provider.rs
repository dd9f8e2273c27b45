//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（Ollama、OpenAI 互換など）はこのトレイトを実装する必要があります。
/// 1 回のリクエストで全文を受け取る（ストリーミングしない）。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストで使うモデル名
    fn model(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `query` - ユーザーメッセージ
    /// * `system_instruction` - システム指示（オプション）
    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 接続失敗・HTTP エラー
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - JSON 不正、またはレスポンス内のエラー
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
