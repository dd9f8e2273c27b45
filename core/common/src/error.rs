//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits.h に合わせる。

use thiserror::Error as ThisError;

/// エラー型
///
/// バリアントごとに終了コードが決まる（`exit_code()`）。
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数・設定の不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 入力（Vault など）が見つからない
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Io(String),
    /// LLM サービスへの HTTP 通信エラー
    #[error("{0}")]
    Http(String),
    /// JSON のパース・シリアライズ、または応答形式の不正
    #[error("{0}")]
    Json(String),
    /// 環境変数の不足
    #[error("{0}")]
    Env(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::NotFound(_) => 66,
            Self::Io(_) | Self::Http(_) | Self::Json(_) => 74,
        }
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
