//! Destinations for generated playlist files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::utils::sanitize_filename;

/// MIME type of XSPF documents
pub const XSPF_MIME_TYPE: &str = "application/xspf+xml";

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write playlist to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Something that persists a generated document, or offers it to the user
pub trait FileSink {
    fn offer(&self, text: &str, filename: &str, mime_type: &str) -> Result<(), SinkError>;
}

/// Sink that accepts and discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FileSink for NullSink {
    fn offer(&self, _text: &str, filename: &str, _mime_type: &str) -> Result<(), SinkError> {
        debug!("Discarding {}", filename);
        Ok(())
    }
}

/// Writes playlists as files inside a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path a playlist with the given filename is written to
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(sanitize_filename(filename))
    }
}

impl FileSink for DirectorySink {
    fn offer(&self, text: &str, filename: &str, mime_type: &str) -> Result<(), SinkError> {
        fs::create_dir_all(&self.root).map_err(|source| SinkError::CreateDir {
            path: self.root.clone(),
            source,
        })?;

        let path = self.path_for(filename);
        fs::write(&path, text).map_err(|source| SinkError::Write {
            path: path.clone(),
            source,
        })?;

        debug!("Wrote {} ({} bytes) to {}", mime_type, text.len(), path.display());
        Ok(())
    }
}
