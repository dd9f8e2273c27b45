//! Vault スキャン: ノートを recent / old に分類し、recent の単語数を合計する
//!
//! 1 ファイルの失敗でスキャン全体を止めない。読めなかったものは SkippedFile として返す。

use common::ports::outbound::{FileSystem, WalkEntry};
use std::path::{Path, PathBuf};

use crate::domain::note::{
    classify_file_name, decode_dropping_invalid, word_count, RECENT_WINDOW_MS,
};
use crate::domain::{FileKind, ScanOutcome, SkippedFile};

/// 1 エントリを見た結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteVisit {
    Recent { path: PathBuf, words: usize },
    Old { path: PathBuf },
    ExcludedReport { path: PathBuf },
    /// .md 以外
    Ignored,
    Skipped(SkippedFile),
}

fn skipped(path: &Path, reason: impl Into<String>) -> NoteVisit {
    NoteVisit::Skipped(SkippedFile {
        path: Some(path.to_path_buf()),
        reason: reason.into(),
    })
}

/// 1 エントリを分類する。recent の判定は「cutoff より後」（境界ちょうどは old）
pub fn visit_entry(fs: &dyn FileSystem, entry: WalkEntry, cutoff_ms: u64) -> NoteVisit {
    let path = match entry {
        Ok(p) => p,
        Err(e) => {
            return NoteVisit::Skipped(SkippedFile {
                path: None,
                reason: e.to_string(),
            })
        }
    };
    let name = match path.file_name() {
        Some(n) => n.to_string_lossy().into_owned(),
        None => return NoteVisit::Ignored,
    };
    match classify_file_name(&name) {
        FileKind::Other => return NoteVisit::Ignored,
        FileKind::QuizReport => return NoteVisit::ExcludedReport { path },
        FileKind::Note => {}
    }

    let modified_ms = match fs.metadata(&path) {
        Ok(m) if !m.is_file() => return skipped(&path, "not a regular file"),
        Ok(m) => match m.modified_ms() {
            Some(ms) => ms,
            None => return skipped(&path, "modification time unavailable"),
        },
        Err(e) => return skipped(&path, e.to_string()),
    };

    if modified_ms > cutoff_ms {
        match fs.read(&path) {
            Ok(bytes) => {
                let words = word_count(&decode_dropping_invalid(&bytes));
                NoteVisit::Recent { path, words }
            }
            Err(e) => skipped(&path, e.to_string()),
        }
    } else {
        NoteVisit::Old { path }
    }
}

/// root 以下を走査して分類する。root が無ければ空の結果に root_missing を立てて返す。
pub fn scan_vault(fs: &dyn FileSystem, root: &Path, now_ms: u64) -> ScanOutcome {
    let mut out = ScanOutcome::default();
    let entries = match fs.walk_files(root) {
        Ok(e) => e,
        Err(_) => {
            out.root_missing = true;
            return out;
        }
    };

    let cutoff_ms = now_ms.saturating_sub(RECENT_WINDOW_MS);
    for entry in entries {
        match visit_entry(fs, entry, cutoff_ms) {
            NoteVisit::Recent { path, words } => {
                out.notes.recent.push(path);
                out.activity_score += words;
            }
            NoteVisit::Old { path } => out.notes.old.push(path),
            NoteVisit::ExcludedReport { path } => out.excluded_reports.push(path),
            NoteVisit::Ignored => {}
            NoteVisit::Skipped(s) => out.skipped.push(s),
        }
    }
    out
}
