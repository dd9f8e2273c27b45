//! ファイルシステム Outbound ポート
//!
//! usecase はこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::path::{Path, PathBuf};

/// 走査で得た 1 エントリ。読めなかったエントリは理由付きの Err になる。
pub type WalkEntry = Result<PathBuf, Error>;

/// ファイルメタデータ（種別・更新時刻）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    is_file: bool,
    is_dir: bool,
    modified_ms: Option<u64>,
}

impl FileMetadata {
    pub fn new(is_file: bool, is_dir: bool, modified_ms: Option<u64>) -> Self {
        Self {
            is_file,
            is_dir,
            modified_ms,
        }
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// 最終更新時刻（Unix epoch ミリ秒）。プラットフォームが返さない場合は None
    pub fn modified_ms(&self) -> Option<u64> {
        self.modified_ms
    }
}

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用のメモリ FS など。
pub trait FileSystem: Send + Sync {
    /// ファイル内容をバイト列で読む（デコードは呼び出し側）
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error>;
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error>;
    /// root 以下を再帰的に走査し、ディレクトリ以外のエントリを安定した順序で返す。
    /// root 自体が開けない場合のみ Err。
    fn walk_files(&self, root: &Path) -> Result<Vec<WalkEntry>, Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;

    /// パスが存在するか（metadata が取れれば true）
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }
}
