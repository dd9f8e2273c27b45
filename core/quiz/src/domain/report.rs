//! クイズレポート（日付で識別される出力ノート）

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// レポートファイル名の日付フォーマット
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unix epoch ミリ秒をローカル日付の文字列にする
pub fn local_date_string(now_ms: u64) -> String {
    let local = i64::try_from(now_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.with_timezone(&Local))
        .unwrap_or_else(Local::now);
    local.format(DATE_FORMAT).to_string()
}

/// `<vault_root>/Daily Quiz - <date>.md`
pub fn report_path(vault_root: &Path, date: &str) -> PathBuf {
    vault_root.join(format!("Daily Quiz - {}.md", date))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub date: String,
    /// 使ったノートのベース名（選択順）
    pub sources: Vec<String>,
    /// モデルの応答（そのまま書く）
    pub body: String,
}

impl QuizReport {
    pub fn new(date: impl Into<String>, sources: Vec<String>, body: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            sources,
            body: body.into(),
        }
    }

    /// ファイルの中身: タイトル行・ソース行・区切り・応答本文
    pub fn render(&self) -> String {
        format!(
            "# 🎓 Daily Security Exam: {}\n**Sources:** {}\n---\n\n{}",
            self.date,
            self.sources.join(", "),
            self.body
        )
    }
}
