//! config.json の読み込み（adapter 層）

use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;

use crate::domain::FileConfig;

/// config.json を読み込む。ファイルが無ければ Ok(None)、JSON が壊れていれば Err（メッセージにパス含める）
pub fn load_file_config(fs: &dyn FileSystem, path: &Path) -> Result<Option<FileConfig>, Error> {
    if !fs.exists(path) {
        return Ok(None);
    }
    let bytes = fs.read(path)?;
    let contents = String::from_utf8(bytes)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))?;
    FileConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}
