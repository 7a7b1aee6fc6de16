use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::format::ColumnFormat;

/// Append-only text file receiving one formatted row per save.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    format: ColumnFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    pub header_written: bool,
    pub bytes_written: usize,
}

impl OutputFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format: ColumnFormat::default(),
        }
    }

    pub fn with_format(mut self, format: ColumnFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one data row, preceded by the header row when the file is empty.
    ///
    /// Emptiness is checked on every call through the open handle, so a file
    /// truncated between saves gets its header again.
    pub fn append<H, V>(&self, header: &[H], values: &[V]) -> io::Result<AppendOutcome>
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let header_written = file.metadata()?.len() == 0;

        let mut payload = String::new();
        if header_written {
            payload.push_str(&self.format.row(header));
        }
        payload.push_str(&self.format.row(values));

        file.write_all(payload.as_bytes())?;
        file.flush()?;
        Ok(AppendOutcome {
            header_written,
            bytes_written: payload.len(),
        })
    }
}
