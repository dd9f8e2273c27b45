//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（LLM・コンソール）を使うための trait

pub mod inbound;
pub mod outbound;
