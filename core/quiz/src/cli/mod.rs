//! CLI（引数解析と Config → QuizCommand の変換）

mod args;

pub use args::{config_to_command, parse_args, Config};
#[cfg(test)]
pub use args::parse_args_from;
