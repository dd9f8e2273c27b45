//! 苦手分野のサマリー（過去 7 日のクイズレポートに付いた #missed の数）

/// ユーザーが間違えた問題に付けるタグ
pub const MISSED_MARKER: &str = "#missed";

/// 監査対象とするクイズレポートの更新時刻の幅（7 日）
pub const AUDIT_WINDOW_MS: u64 = 7 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeakAreaSummary {
    /// #missed を含むクイズレポートの数
    pub missed_count: usize,
}

impl WeakAreaSummary {
    pub fn new(missed_count: usize) -> Self {
        Self { missed_count }
    }

    pub fn interpretation(&self) -> String {
        if self.missed_count > 0 {
            format!(
                "ATTENTION: The user marked {} quizzes as containing errors or missed concepts this week. Focus on reinforcing weak areas.",
                self.missed_count
            )
        } else {
            "User performance has been clean recently.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpretation_clean() {
        assert_eq!(
            WeakAreaSummary::new(0).interpretation(),
            "User performance has been clean recently."
        );
    }

    #[test]
    fn test_interpretation_embeds_count() {
        let s = WeakAreaSummary::new(3).interpretation();
        assert!(s.starts_with("ATTENTION: The user marked 3 quizzes"));
        assert!(s.ends_with("Focus on reinforcing weak areas."));
    }
}
