use crate::config::GeneratorConfig;
use crate::error::WriteError;
use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Where a file ended up
#[derive(Debug)]
pub enum WriteOutcome {
    /// Written to the asset catalog
    Primary(PathBuf),
    /// Catalog write failed; written to the fallback directory instead
    Fallback {
        path: PathBuf,
        primary_error: io::Error,
    },
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Primary(path) => path,
            WriteOutcome::Fallback { path, .. } => path,
        }
    }
}

/// Writes generated files to the asset catalog, with a user-writable fallback
pub struct IconWriter {
    primary_dir: PathBuf,
    fallback_dir: PathBuf,
}

impl IconWriter {
    pub fn new(primary_dir: impl Into<PathBuf>, fallback_dir: impl Into<PathBuf>) -> Self {
        IconWriter {
            primary_dir: primary_dir.into(),
            fallback_dir: fallback_dir.into(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.primary_dir.clone(), config.fallback_dir.clone())
    }

    pub fn primary_dir(&self) -> &Path {
        &self.primary_dir
    }

    pub fn fallback_dir(&self) -> &Path {
        &self.fallback_dir
    }

    /// Write `bytes` as `file_name`, overwriting any existing file
    ///
    /// The catalog directory is never created: if it is missing the file goes
    /// to the fallback directory, which is created on demand.
    pub fn write(&self, file_name: &str, bytes: &[u8]) -> Result<WriteOutcome, WriteError> {
        let primary_path = self.primary_dir.join(file_name);

        let primary_error = match replace_file(&self.primary_dir, &primary_path, bytes) {
            Ok(()) => {
                info!("wrote {}", primary_path.display());
                return Ok(WriteOutcome::Primary(primary_path));
            }
            Err(e) => e,
        };

        warn!(
            "could not write {} ({}), trying fallback directory {}",
            primary_path.display(),
            primary_error,
            self.fallback_dir.display()
        );

        let fallback_path = self.fallback_dir.join(file_name);
        let fallback_result = fs::create_dir_all(&self.fallback_dir)
            .and_then(|()| replace_file(&self.fallback_dir, &fallback_path, bytes));

        match fallback_result {
            Ok(()) => {
                info!("wrote {} (fallback)", fallback_path.display());
                Ok(WriteOutcome::Fallback {
                    path: fallback_path,
                    primary_error,
                })
            }
            Err(fallback) => Err(WriteError {
                primary_path,
                primary: primary_error,
                fallback_path,
                fallback,
            }),
        }
    }
}

/// Write to a temp file in `dir`, then rename it over `path`
///
/// A failed write never leaves a truncated file at `path`; the temp file is
/// removed when it is dropped without being persisted.
fn replace_file(dir: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
