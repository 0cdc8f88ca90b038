use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use thiserror::Error;

/// Failure raised by a destination file operation. Every variant carries the
/// target path so diagnostics name the destination that misbehaved.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create {path}: {source}")]
    Create { path: PathBuf, source: io::Error },

    #[error("Failed to read content from file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write content into file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// One category's destination file.
///
/// Binds a value type to a single path and owns the overwrite-vs-preserve
/// policy along with the items committed by the most recent successful write.
/// The file handle is opened and closed inside each call; nothing is held
/// between calls.
pub struct DestinationStore<T> {
    path: PathBuf,
    overwrite: bool,
    last_written: Vec<T>,
}

impl<T: Display + Clone> DestinationStore<T> {
    pub fn new(path: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            path: path.into(),
            overwrite,
            last_written: Vec::new(),
        }
    }

    /// Persists `items` to the destination, one `Display` rendering per line.
    ///
    /// With overwrite disabled the current content is read back first and
    /// re-emitted ahead of the new items; the file is always rewritten from
    /// scratch. `last_written` is cleared on entry and repopulated only when
    /// the whole write succeeds, so a failed call never reports stale items.
    ///
    /// Creating a missing destination (and its parent directories) is
    /// best-effort: a creation failure is logged and the write is still
    /// attempted, which surfaces the real `Write` error to the caller.
    pub fn write(&mut self, items: &[T]) -> Result<(), StoreError> {
        self.last_written.clear();

        if let Err(err) = self.ensure_target() {
            error!("{err}");
        }

        let preserved = if self.overwrite {
            Vec::new()
        } else {
            match self.read() {
                Ok(lines) => lines,
                Err(err) => {
                    debug!("Treating destination as empty: {err}");
                    Vec::new()
                }
            }
        };

        let file = File::create(&self.path).map_err(|e| self.write_error(e))?;
        let mut writer = BufWriter::new(file);

        for line in &preserved {
            writeln!(writer, "{line}").map_err(|e| self.write_error(e))?;
        }

        for item in items {
            writeln!(writer, "{item}").map_err(|e| self.write_error(e))?;
        }

        writer.flush().map_err(|e| self.write_error(e))?;

        self.last_written.extend_from_slice(items);
        Ok(())
    }

    /// Returns the destination's current content as lines. Callers treat an
    /// error as "no existing content" rather than propagating it.
    pub fn read(&self) -> Result<Vec<String>, StoreError> {
        let file = File::open(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })
    }

    fn ensure_target(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Create {
                    path: parent.to_path_buf(),
                    source,
                })?;
                info!("Created directory {}", parent.display());
            }
        }

        match OpenOptions::new().write(true).create_new(true).open(&self.path) {
            Ok(_) => {
                info!("Created file {}", self.path.display());
                Ok(())
            }
            // Lost the race with another creator; the file is there either way
            Err(source) if source.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(source) => Err(StoreError::Create {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }

    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.overwrite = overwrite;
    }

    /// Items committed by the most recent successful write; empty if that
    /// write failed or none has happened yet.
    pub fn last_written(&self) -> &[T] {
        &self.last_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
