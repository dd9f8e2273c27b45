//! 苦手分野の監査: 過去 7 日のクイズレポートのうち #missed を含むものを数える

use common::ports::outbound::FileSystem;
use std::path::Path;

use crate::domain::note::{classify_file_name, decode_dropping_invalid};
use crate::domain::weak_area::{AUDIT_WINDOW_MS, MISSED_MARKER};
use crate::domain::{FileKind, SkippedFile, WeakAreaSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOutcome {
    pub summary: WeakAreaSummary,
    /// 監査対象になったレポート数（#missed の有無を問わない）
    pub reports_checked: usize,
    pub skipped: Vec<SkippedFile>,
}

pub fn audit_weak_areas(fs: &dyn FileSystem, root: &Path, now_ms: u64) -> AuditOutcome {
    let mut missed = 0;
    let mut checked = 0;
    let mut skipped = Vec::new();
    let cutoff_ms = now_ms.saturating_sub(AUDIT_WINDOW_MS);

    for entry in fs.walk_files(root).unwrap_or_default() {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                skipped.push(SkippedFile {
                    path: None,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let is_report = path
            .file_name()
            .map(|n| classify_file_name(&n.to_string_lossy()) == FileKind::QuizReport)
            .unwrap_or(false);
        if !is_report {
            continue;
        }

        let content = fs.metadata(&path).and_then(|m| {
            match m.modified_ms() {
                Some(ms) if m.is_file() && ms > cutoff_ms => fs.read(&path).map(Some),
                _ => Ok(None),
            }
        });
        match content {
            Ok(Some(bytes)) => {
                checked += 1;
                if decode_dropping_invalid(&bytes).contains(MISSED_MARKER) {
                    missed += 1;
                }
            }
            Ok(None) => {}
            Err(e) => skipped.push(SkippedFile {
                path: Some(path),
                reason: e.to_string(),
            }),
        }
    }

    AuditOutcome {
        summary: WeakAreaSummary::new(missed),
        reports_checked: checked,
        skipped,
    }
}
