//! 難易度ティア（活動量から recent / old の出題数を決める）

/// 既定のしきい値（単語数）。これを超えると High
pub const DEFAULT_PRODUCTIVITY_THRESHOLD: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTier {
    /// 高活動量: recent 5 / old 3
    High,
    /// 低活動量: recent 3 / old 2
    Low,
}

impl DifficultyTier {
    /// score がしきい値を「超える」ときだけ High（等しい場合は Low）
    pub fn from_score(score: usize, threshold: usize) -> Self {
        if score > threshold {
            Self::High
        } else {
            Self::Low
        }
    }

    /// (recent_count, old_count)
    pub fn counts(&self) -> (usize, usize) {
        match self {
            Self::High => (5, 3),
            Self::Low => (3, 2),
        }
    }

    pub fn question_count(&self) -> usize {
        let (recent, old) = self.counts();
        recent + old
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }

    /// コンソールに出す 1 行
    pub fn describe(&self, score: usize) -> String {
        let volume = match self {
            Self::High => "High Volume",
            Self::Low => "Low Volume",
        };
        format!(
            "{} ({} words). Generating {} Exam Questions.",
            volume,
            score,
            self.question_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(DifficultyTier::from_score(500, 500), DifficultyTier::Low);
        assert_eq!(DifficultyTier::from_score(501, 500), DifficultyTier::High);
        assert_eq!(DifficultyTier::from_score(0, 500), DifficultyTier::Low);
    }

    #[test]
    fn test_counts() {
        assert_eq!(DifficultyTier::Low.counts(), (3, 2));
        assert_eq!(DifficultyTier::High.counts(), (5, 3));
        assert_eq!(DifficultyTier::High.question_count(), 8);
        assert_eq!(DifficultyTier::Low.question_count(), 5);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            DifficultyTier::High.describe(600),
            "High Volume (600 words). Generating 8 Exam Questions."
        );
        assert_eq!(
            DifficultyTier::Low.describe(12),
            "Low Volume (12 words). Generating 5 Exam Questions."
        );
    }
}
