//! テスト用: 固定の応答（またはエラー）を返す LlmCompletion 実装


#[cfg(test)]
pub use stub::StubCompletion;
