//! Outbound ポート: アプリが外界（LLM・コンソール）を使うための trait

pub mod llm_completion;
pub mod progress;

pub use llm_completion::LlmCompletion;
pub use progress::Progress;
