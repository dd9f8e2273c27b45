//! daily-quiz 固有のドメイン型（型と不変条件）

pub mod command;
pub mod config;
pub mod note;
pub mod prompt;
pub mod report;
pub mod tier;
pub mod weak_area;

pub use command::QuizCommand;
pub use config::{CliOverrides, FileConfig, QuizConfig};
pub use note::{ClassifiedNotes, FileKind, ScanOutcome, SkippedFile};
pub use prompt::QuizPrompt;
pub use report::QuizReport;
pub use tier::DifficultyTier;
pub use weak_area::WeakAreaSummary;
