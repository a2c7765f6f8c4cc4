//! Loading shape files from disk.

use crate::codec::{DecodeError, ShapeFormat, decode};
use crate::shapes::Shape;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort loading a whole file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Message suitable for showing to the person who picked the file.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => {
                    "The file was not found. Please select a valid file.".to_string()
                }
                io::ErrorKind::PermissionDenied => {
                    "You do not have permission to open this file.".to_string()
                }
                _ => format!("An error occurred while accessing the file: {}", source),
            },
            LoadError::Decode(e) => e.to_string(),
        }
    }
}

/// Source of decoded shapes for a file path.
pub trait ShapeSource {
    /// Read and decode every shape in the file at `path`.
    fn read_shapes(&self, path: &Path) -> Result<Vec<Shape>, LoadError>;
}

/// Reads shape files from the local filesystem, picking the decoder from the
/// file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeReader;

impl ShapeReader {
    pub fn new() -> Self {
        Self
    }
}

impl ShapeSource for ShapeReader {
    fn read_shapes(&self, path: &Path) -> Result<Vec<Shape>, LoadError> {
        // Reject unknown extensions before touching the filesystem.
        let format = ShapeFormat::from_path(path)?;

        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let shapes = decode(&bytes, format)?;
        log::info!("Loaded {} shapes from {}", shapes.len(), path.display());
        Ok(shapes)
    }
}
