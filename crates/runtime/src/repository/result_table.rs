//! Persisted copy of the results table.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use race_core::{Report, ReportSink};

use crate::repository::{RepositoryError, Result};

/// Writes report lines to a file, one per line.
///
/// The file is truncated and rewritten on every write, so it always holds
/// the table of the latest run only.
pub struct ResultTableWriter {
    path: PathBuf,
}

impl ResultTableWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_lines<I, L>(&self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(RepositoryError::io(parent))?;
        }

        let file = File::create(&self.path).map_err(RepositoryError::io(&self.path))?;
        let mut writer = BufWriter::new(file);

        let mut written = 0;
        for line in lines {
            writeln!(writer, "{}", line.as_ref()).map_err(RepositoryError::io(&self.path))?;
            written += 1;
        }
        writer.flush().map_err(RepositoryError::io(&self.path))?;

        tracing::debug!("Wrote {} rows to {}", written, self.path.display());
        Ok(written)
    }
}

impl ReportSink for ResultTableWriter {
    type Error = RepositoryError;

    fn write_report(&mut self, report: &Report) -> Result<()> {
        self.write_lines(report.lines()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_file_on_every_write() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ResultTableWriter::new(dir.path().join("out").join("resulting_table"));

        writer.write_lines(["first", "second", "third"]).unwrap();
        writer.write_lines(["only"]).unwrap();

        let content = std::fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content, "only\n");
    }

    #[test]
    fn empty_report_leaves_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ResultTableWriter::new(dir.path().join("resulting_table"));

        Report::default().write_to(&mut writer).unwrap();

        assert_eq!(std::fs::read_to_string(writer.path()).unwrap(), "");
    }
}
