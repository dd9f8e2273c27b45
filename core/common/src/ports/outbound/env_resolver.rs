//! 環境変数解決 Outbound ポート
//!
//! 設定・状態ディレクトリを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Dirs;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// config / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. QUIZ_HOME（設定されていれば $QUIZ_HOME/config, $QUIZ_HOME/state）
    /// 2. $XDG_CONFIG_HOME/daily-quiz, $XDG_STATE_HOME/daily-quiz
    /// 3. $HOME/.config/daily-quiz, $HOME/.local/state/daily-quiz
    fn resolve_dirs(&self) -> Result<Dirs, Error>;
}
