//! ドメイン型（Newtype）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

pub mod dirs;

use std::path::{Path, PathBuf};

pub use dirs::Dirs;

/// Vault（ノート群のルートディレクトリ）のパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultRoot(PathBuf);

impl VaultRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl std::ops::Deref for VaultRoot {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for VaultRoot {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for VaultRoot {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// モデル名（llama3.2-vision 等）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ModelName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_root_deref() {
        let root = VaultRoot::new("/tmp/vault");
        assert_eq!(root.join("a.md"), PathBuf::from("/tmp/vault/a.md"));
        assert_eq!(root.as_ref(), Path::new("/tmp/vault"));
    }

    #[test]
    fn test_model_name_display() {
        let m = ModelName::new("llama3.2-vision");
        assert_eq!(m.to_string(), "llama3.2-vision");
        assert_eq!(&*m, "llama3.2-vision");
    }
}
