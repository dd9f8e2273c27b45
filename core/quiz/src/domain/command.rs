//! daily-quiz コマンドの enum（Command Pattern）

/// daily-quiz の実行モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCommand {
    /// ヘルプ表示
    Help,
    /// クイズを生成してレポートを書く
    Generate,
    /// プロンプトまで組み立てて表示する（モデル呼び出し・書き込みなし）
    DryRun,
}

impl QuizCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Generate => "generate",
            Self::DryRun => "dry-run",
        }
    }
}
