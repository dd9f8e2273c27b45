//! ノートの抽出: ティアの件数まで recent / old からそれぞれ非復元抽出する

use rand::seq::SliceRandom;
use rand::Rng;
use std::path::PathBuf;

use crate::domain::{ClassifiedNotes, DifficultyTier};

/// recent から先、old を後に並べた選択リスト。
/// 各列から min(len, 件数) 件を重複なしで選ぶ。
pub fn sample_notes<R: Rng + ?Sized>(
    notes: &ClassifiedNotes,
    tier: DifficultyTier,
    rng: &mut R,
) -> Vec<PathBuf> {
    let (recent_count, old_count) = tier.counts();
    let mut selection: Vec<PathBuf> = notes
        .recent
        .choose_multiple(rng, recent_count)
        .cloned()
        .collect();
    selection.extend(notes.old.choose_multiple(rng, old_count).cloned());
    selection
}
