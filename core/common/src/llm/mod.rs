//! LLMプロバイダの実装
//!
//! このモジュールは、異なるLLMプロバイダ（Ollama、OpenAI 互換など）で共通する処理を提供します。

pub mod echo;
pub mod factory;
pub mod http;
pub mod ollama;
pub mod openai_compat;
pub mod provider;

pub use factory::{create_provider, AnyProvider, ProviderOptions, ProviderType};
pub use provider::LlmProvider;
