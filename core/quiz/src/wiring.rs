//! 配線: 標準アダプタで App と QuizUseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    FileJsonLog, NoopLog, StderrLog, StdClock, StdEnvResolver, StdFileSystem,
};
use common::llm::create_provider;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log};

use crate::adapter::{ConsoleProgress, ProviderCompletion};
use crate::domain::QuizConfig;
use crate::ports::outbound::{LlmCompletion, Progress};
use crate::usecase::app::{QuizDeps, QuizUseCase};

/// 設定に依らない部品の束（main / テストで差し替える）
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub clock: Arc<dyn Clock>,
    pub env_resolver: Arc<dyn EnvResolver>,
    pub progress: Arc<dyn Progress>,
    pub logger: Arc<dyn Log>,
    /// Some のとき設定のプロバイダより優先する（テスト用のスタブなど）
    pub completion: Option<Arc<dyn LlmCompletion>>,
}

/// 標準アダプタで App を組み立てる。ログは state/logs/daily-quiz.jsonl（解決できなければ出さない）
pub fn wire_app(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let file_log: Arc<dyn Log> = match env_resolver.resolve_dirs() {
        Ok(dirs) => Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file())),
        Err(_) => Arc::new(NoopLog),
    };
    let logger: Arc<dyn Log> = if verbose {
        Arc::new(StderrLog::new(file_log))
    } else {
        file_log
    };
    App {
        fs,
        clock: Arc::new(StdClock),
        env_resolver,
        progress: Arc::new(ConsoleProgress),
        logger,
        completion: None,
    }
}

/// 設定のプロバイダから LlmCompletion を作る
pub fn completion_for(config: &QuizConfig) -> Arc<dyn LlmCompletion> {
    let provider = create_provider(config.provider, config.provider_options());
    Arc::new(ProviderCompletion::new(provider))
}

pub fn wire_use_case(app: &App, config: &QuizConfig) -> QuizUseCase {
    let completion = app
        .completion
        .clone()
        .unwrap_or_else(|| completion_for(config));
    QuizUseCase::new(QuizDeps {
        fs: Arc::clone(&app.fs),
        clock: Arc::clone(&app.clock),
        completion,
        progress: Arc::clone(&app.progress),
        log: Arc::clone(&app.logger),
    })
}
