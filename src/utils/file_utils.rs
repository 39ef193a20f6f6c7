//! File handling utilities
//!
//! This module loads a book from disk into memory as a single string and
//! classifies the ways that can fail.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;

/// Errors raised while loading a book from disk
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The path does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other read failure (permissions, directories, invalid UTF-8)
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path } | LoadError::Io { path, .. } => path,
        }
    }

    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound { path: path.to_path_buf() }
        } else {
            LoadError::Io { path: path.to_path_buf(), source }
        }
    }
}

/// Read the entire content of a file as UTF-8 text.
///
/// # Arguments
///
/// * `file_path` - Path to the book
///
/// # Returns
///
/// The file content, or a `LoadError` describing why it could not be read
pub fn read_book_text(file_path: &Path) -> Result<String, LoadError> {
    let mut file = File::open(file_path).map_err(|e| LoadError::from_io(file_path, e))?;

    let mut content = String::new();
    // Invalid UTF-8 surfaces here as ErrorKind::InvalidData
    file.read_to_string(&mut content).map_err(|e| LoadError::from_io(file_path, e))?;

    debug!("Read {} bytes from {}", content.len(), file_path.display());
    Ok(content)
}
