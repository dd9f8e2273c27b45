//! 単発 LLM 完了の Outbound ポート
//!
//! ストリーミングではなく 1 回のリクエストで全文応答を取得する。
//! パイプラインはこの trait だけを見るので、テストではスタブに差し替える。

use common::error::Error;

/// 単発の LLM 完了（system + user で応答文字列を取得）
pub trait LlmCompletion: Send + Sync {
    /// 表示用のラベル（例: "ollama (llama3.2-vision)"）
    fn describe(&self) -> String;

    fn complete(&self, system_instruction: &str, user_message: &str) -> Result<String, Error>;
}
