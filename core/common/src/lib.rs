//! daily-quiz 共通ライブラリ
//!
//! エラー型・ドメイン型・Outbound ポートと標準アダプター・LLM プロバイダを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプター
pub mod adapter;

/// LLMプロバイダ
pub mod llm;
