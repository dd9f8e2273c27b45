//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::Dirs;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "daily-quiz";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<PathBuf> {
    env::var(name).ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// 環境変数の値から Dirs を決める（env に触れない純粋関数）
pub fn dirs_from_vars(
    quiz_home: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
    xdg_state_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<Dirs, Error> {
    if let Some(h) = quiz_home {
        return Ok(Dirs {
            config_dir: h.join("config"),
            state_dir: h.join("state"),
        });
    }

    let config_base = xdg_config_home
        .or_else(|| home.as_ref().map(|h| h.join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;
    let state_base = xdg_state_home
        .or_else(|| home.as_ref().map(|h| h.join(".local/state")))
        .ok_or_else(|| Error::env("HOME is not set"))?;

    Ok(Dirs {
        config_dir: config_base.join(APP_DIR),
        state_dir: state_base.join(APP_DIR),
    })
}

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        dirs_from_vars(
            non_empty_var("QUIZ_HOME"),
            non_empty_var("XDG_CONFIG_HOME"),
            non_empty_var("XDG_STATE_HOME"),
            non_empty_var("HOME"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_home_wins() {
        let d = dirs_from_vars(
            Some(PathBuf::from("/q")),
            Some(PathBuf::from("/xdg")),
            None,
            Some(PathBuf::from("/home/u")),
        )
        .unwrap();
        assert_eq!(d.config_dir, PathBuf::from("/q/config"));
        assert_eq!(d.state_dir, PathBuf::from("/q/state"));
    }

    #[test]
    fn test_xdg_then_home() {
        let d = dirs_from_vars(
            None,
            Some(PathBuf::from("/xdg")),
            None,
            Some(PathBuf::from("/home/u")),
        )
        .unwrap();
        assert_eq!(d.config_dir, PathBuf::from("/xdg/daily-quiz"));
        assert_eq!(d.state_dir, PathBuf::from("/home/u/.local/state/daily-quiz"));
    }

    #[test]
    fn test_no_home_is_env_error() {
        let err = dirs_from_vars(None, None, None, None).unwrap_err();
        assert!(matches!(err, Error::Env(_)));
    }
}
