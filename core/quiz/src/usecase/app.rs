//! daily-quiz のユースケース（スキャン → 抽出 → 組み立て → LLM → 書き込み）

use common::domain::VaultRoot;
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::note::note_title;
use crate::domain::report::local_date_string;
use crate::domain::{DifficultyTier, QuizPrompt, QuizReport, SkippedFile};
use crate::ports::outbound::{LlmCompletion, Progress};
use crate::usecase::assemble::assemble_prompt;
use crate::usecase::audit::audit_weak_areas;
use crate::usecase::report::write_report;
use crate::usecase::sample::sample_notes;
use crate::usecase::scan::scan_vault;

pub struct QuizDeps {
    pub fs: Arc<dyn FileSystem>,
    pub clock: Arc<dyn Clock>,
    pub completion: Arc<dyn LlmCompletion>,
    pub progress: Arc<dyn Progress>,
    pub log: Arc<dyn Log>,
}

/// 1 回の実行に渡すパラメータ
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub vault: VaultRoot,
    pub productivity_threshold: usize,
    pub include_weak_areas: bool,
    /// None のときエントロピーから
    pub seed: Option<u64>,
    pub dry_run: bool,
}

/// 実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// レポートを書いた
    Written { path: PathBuf, sources: Vec<String> },
    /// 選べるノートが無かった（エラーではない）
    NothingToProcess,
    /// --dry-run: プロンプトまで
    DryRun { prompt: QuizPrompt, sources: Vec<String> },
}

/// daily-quiz のユースケース（アダプター経由で I/O を行う）
pub struct QuizUseCase {
    deps: QuizDeps,
}

impl QuizUseCase {
    pub fn new(deps: QuizDeps) -> Self {
        Self { deps }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.deps.log.log(&record.layer("usecase"));
    }

    fn log_skipped(&self, kind: &str, skipped: &[SkippedFile]) {
        for s in skipped {
            let path = s
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            self.log(
                LogRecord::new(LogLevel::Warn, "skipped file")
                    .kind(kind)
                    .field("path", path)
                    .field("reason", s.reason.clone()),
            );
        }
    }

    pub fn run(&self, opts: &RunOptions) -> Result<RunOutcome, Error> {
        let fs = self.deps.fs.as_ref();
        let progress = self.deps.progress.as_ref();
        let now_ms = self.deps.clock.now_ms();

        progress.info("Starting Exam Simulation Analysis...");

        let scan = scan_vault(fs, &opts.vault, now_ms);
        if scan.root_missing {
            return Err(Error::not_found(format!(
                "Vault path not found: {}",
                opts.vault.display()
            )));
        }
        self.log_skipped("scan", &scan.skipped);
        self.log(
            LogRecord::new(LogLevel::Info, "scan finished")
                .kind("scan")
                .field("recent", scan.notes.recent.len())
                .field("old", scan.notes.old.len())
                .field("excluded_reports", scan.excluded_reports.len())
                .field("skipped", scan.skipped.len())
                .field("activity_score", scan.activity_score),
        );

        let tier = DifficultyTier::from_score(scan.activity_score, opts.productivity_threshold);
        progress.info(&tier.describe(scan.activity_score));

        if scan.notes.is_empty() {
            progress.info("No notes found to process.");
            return Ok(RunOutcome::NothingToProcess);
        }

        let selection = match opts.seed {
            Some(seed) => sample_notes(&scan.notes, tier, &mut StdRng::seed_from_u64(seed)),
            None => sample_notes(&scan.notes, tier, &mut StdRng::from_entropy()),
        };
        self.log(
            LogRecord::new(LogLevel::Info, "notes selected")
                .kind("sample")
                .field("tier", tier.as_str())
                .field("selected", selection.len())
                .field("seed", opts.seed),
        );
        let sources: Vec<String> = selection.iter().map(|p| note_title(p)).collect();

        // 苦手分野は常に集計してログに残す。プロンプトへの追記は設定次第
        let audit = audit_weak_areas(fs, &opts.vault, now_ms);
        self.log_skipped("audit", &audit.skipped);
        self.log(
            LogRecord::new(LogLevel::Info, "weak areas audited")
                .kind("audit")
                .field("reports_checked", audit.reports_checked)
                .field("missed", audit.summary.missed_count)
                .field("included", opts.include_weak_areas),
        );
        let weak_areas = opts.include_weak_areas.then_some(&audit.summary);

        let assembled = assemble_prompt(fs, &selection, weak_areas);
        for (path, e) in &assembled.unreadable {
            progress.warn(&format!("Error reading {}: {}", path.display(), e));
        }
        let prompt = assembled.prompt;

        if opts.dry_run {
            return Ok(RunOutcome::DryRun { prompt, sources });
        }

        progress.info(&format!(
            "Generating Exam Questions with {}...",
            self.deps.completion.describe()
        ));
        self.log(
            LogRecord::new(LogLevel::Info, "model request")
                .kind("llm")
                .field("system_chars", prompt.system.chars().count())
                .field("user_chars", prompt.user.chars().count()),
        );
        let quiz = self
            .deps
            .completion
            .complete(&prompt.system, &prompt.user)?;
        self.log(
            LogRecord::new(LogLevel::Info, "model response")
                .kind("llm")
                .field("chars", quiz.chars().count()),
        );

        let report = QuizReport::new(local_date_string(now_ms), sources, quiz);
        let path = write_report(fs, &opts.vault, &report)?;
        self.log(
            LogRecord::new(LogLevel::Info, "report written")
                .kind("report")
                .field("path", path.display().to_string()),
        );
        progress.info(&format!("✅ Success! Exam saved to: {}", path.display()));

        Ok(RunOutcome::Written {
            path,
            sources: report.sources,
        })
    }
}
