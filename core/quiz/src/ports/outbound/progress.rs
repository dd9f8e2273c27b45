//! 進捗表示の Outbound ポート（人間向け。機械可読な出力ではない）

pub trait Progress: Send + Sync {
    /// 通常の進捗（stdout）
    fn info(&self, message: &str);
    /// 警告・エラー（stderr）
    fn warn(&self, message: &str);
}
