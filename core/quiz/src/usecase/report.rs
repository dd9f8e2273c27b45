//! レポート書き込み: `Daily Quiz - <date>.md` を作る（同日のものは上書き）

use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};

use crate::domain::report::report_path;
use crate::domain::QuizReport;

pub fn write_report(
    fs: &dyn FileSystem,
    vault_root: &Path,
    report: &QuizReport,
) -> Result<PathBuf, Error> {
    let path = report_path(vault_root, &report.date);
    fs.write(&path, &report.render())?;
    Ok(path)
}
