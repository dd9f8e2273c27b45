//! ノートの分類結果（recent / old）とスキャン時のスキップ理由

use std::path::{Path, PathBuf};

/// ノートとして扱う拡張子
pub const NOTE_EXTENSION: &str = ".md";

/// クイズレポートのファイル名に含まれる目印。ノートからは除外する。
pub const QUIZ_REPORT_MARKER: &str = "Daily Quiz";

/// recent とみなす更新時刻の幅（24 時間）
pub const RECENT_WINDOW_MS: u64 = 24 * 60 * 60 * 1000;

/// ファイル名から種別を判定した結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// 通常のノート（.md かつクイズレポートでない）
    Note,
    /// 生成済みのクイズレポート
    QuizReport,
    /// 対象外
    Other,
}

pub fn classify_file_name(name: &str) -> FileKind {
    if !name.ends_with(NOTE_EXTENSION) {
        return FileKind::Other;
    }
    if name.contains(QUIZ_REPORT_MARKER) {
        FileKind::QuizReport
    } else {
        FileKind::Note
    }
}

/// パスのベース名（ソース一覧・タグの title に使う）
pub fn note_title(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// 空白区切りのトークン数
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// UTF-8 として読めないバイトを捨ててデコードする（置換文字は入れない）
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(s) => {
                out.push_str(s);
                return out;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                // valid_up_to までは検証済み
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match e.error_len() {
                    Some(n) => rest = &after[n..],
                    None => return out,
                }
            }
        }
    }
}

/// スキャン中に読めなかったファイル（スキャン自体は継続する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// 走査エラーでパスが分からない場合は None
    pub path: Option<PathBuf>,
    pub reason: String,
}

/// recent / old に分類されたノートのパス列（走査順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedNotes {
    pub recent: Vec<PathBuf>,
    pub old: Vec<PathBuf>,
}

impl ClassifiedNotes {
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty() && self.old.is_empty()
    }
}

/// Vault スキャンの結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub notes: ClassifiedNotes,
    /// recent ノートの単語数の合計
    pub activity_score: usize,
    /// ファイル名でノートから除外したクイズレポート
    pub excluded_reports: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
    /// root が存在しない（またはディレクトリでない）
    pub root_missing: bool,
}
