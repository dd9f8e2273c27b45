//! 進捗表示の実装（stdout / stderr）

use crate::ports::outbound::Progress;

/// 標準出力・標準エラーへそのまま出す
#[derive(Debug, Clone, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod recording {
    use crate::ports::outbound::Progress;
    use std::sync::Mutex;

    /// テスト用: 出力された行を記録する
    #[derive(Default)]
    pub struct RecordingProgress {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingProgress {
        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().map(|l| l.clone()).unwrap_or_default()
        }

        pub fn contains(&self, needle: &str) -> bool {
            self.lines().iter().any(|l| l.contains(needle))
        }
    }

    impl Progress for RecordingProgress {
        fn info(&self, message: &str) {
            if let Ok(mut l) = self.lines.lock() {
                l.push(message.to_string());
            }
        }

        fn warn(&self, message: &str) {
            self.info(message);
        }
    }
}

#[cfg(test)]
pub use recording::RecordingProgress;
