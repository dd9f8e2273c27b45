//! プロンプト組み立て: 選ばれたノートを読み、タグ付きブロックを連結する

use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::PathBuf;

use crate::domain::note::{decode_dropping_invalid, note_title};
use crate::domain::prompt::{source_block, system_instruction, user_message};
use crate::domain::{QuizPrompt, WeakAreaSummary};

/// 組み立て結果。読めなかったノートは空本文で含め、エラーを unreadable に残す
#[derive(Debug, Clone)]
pub struct AssembledPrompt {
    pub prompt: QuizPrompt,
    pub unreadable: Vec<(PathBuf, Error)>,
}

pub fn assemble_prompt(
    fs: &dyn FileSystem,
    selection: &[PathBuf],
    weak_areas: Option<&WeakAreaSummary>,
) -> AssembledPrompt {
    let mut context = String::new();
    let mut unreadable = Vec::new();
    for path in selection {
        let text = match fs.read(path) {
            Ok(bytes) => decode_dropping_invalid(&bytes),
            Err(e) => {
                unreadable.push((path.clone(), e));
                String::new()
            }
        };
        context.push_str(&source_block(&note_title(path), &text));
    }

    let summary = weak_areas.map(|w| w.interpretation());
    AssembledPrompt {
        prompt: QuizPrompt {
            system: system_instruction(summary.as_deref()),
            user: user_message(&context),
        },
        unreadable,
    }
}
