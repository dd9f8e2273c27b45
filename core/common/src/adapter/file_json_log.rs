//! Log 実装（ファイルへ JSONL 追記 / stderr への要約表示 / 何もしない）
//!
//! JSONL の出力先はファイルのみ。進捗表示（stdout）やエラー表示（stderr）とは別。

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FIELDS_SUMMARY_MAX: usize = 400;

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let mut w = self.fs.open_append(&self.path)?;
        let line = serde_json::to_string(record)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

/// -v 指定時: レコードの要点を stderr に出してから内側の Log に渡す
pub struct StderrLog {
    inner: Arc<dyn Log>,
}

impl StderrLog {
    pub fn new(inner: Arc<dyn Log>) -> Self {
        Self { inner }
    }
}

/// fields の要点だけを短い文字列にする（巨大化防止）
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = record.fields.as_ref() else {
        return String::new();
    };
    let s = serde_json::to_string(fields).unwrap_or_default();
    if s.chars().count() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated: String = s.chars().take(FIELDS_SUMMARY_MAX).collect();
    format!("{}... (len={})", truncated, s.len())
}

/// stderr 1 行分の表示
pub fn format_human_line(record: &LogRecord) -> String {
    let mut line = match record.kind.as_deref() {
        Some(kind) => format!("[{}:{}] {}", record.level.as_str(), kind, record.message),
        None => format!("[{}] {}", record.level.as_str(), record.message),
    };
    let summary = fields_summary(record);
    if !summary.is_empty() {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_human_line(record));
        self.inner.log(record)
    }
}
