//! Source buffers for the Clover lexer.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while loading or reading a source buffer.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("index {index} is out of range for source of length {length}")]
    OutOfRange { index: usize, length: usize },

    #[error("{source}: {file}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },
}

/// An immutable, fully loaded view of one source file's bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    file: String,
    data: Vec<u8>,
}

impl SourceBuffer {
    /// Create a source buffer from in-memory bytes.
    pub fn new(file: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file: file.into(),
            data: data.into(),
        }
    }

    /// Load a source buffer from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = path.display().to_string();
        match fs::read(path) {
            Ok(data) => Ok(Self { file, data }),
            Err(source) => Err(SourceError::Io { file, source }),
        }
    }

    /// The name of the file this buffer was loaded from.
    pub fn file_name(&self) -> &str {
        &self.file
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Read the byte at `index`.
    pub fn byte_at(&self, index: usize) -> Result<u8, SourceError> {
        self.data
            .get(index)
            .copied()
            .ok_or(SourceError::OutOfRange {
                index,
                length: self.len(),
            })
    }

    /// Copy `length` bytes starting at `offset`.
    pub fn slice(&self, offset: usize, length: usize) -> Result<Vec<u8>, SourceError> {
        let end = offset.checked_add(length).unwrap_or(usize::MAX);
        match self.data.get(offset..end) {
            Some(bytes) => Ok(bytes.to_vec()),
            None => Err(SourceError::OutOfRange {
                index: end,
                length: self.len(),
            }),
        }
    }

    /// Borrow everything from `offset` to the end of the buffer.
    ///
    /// An offset at or past the end yields an empty view.
    pub fn view_from(&self, offset: usize) -> &[u8] {
        self.data.get(offset..).unwrap_or_default()
    }

    /// The text of the line starting at `line_offset`, without its terminator.
    pub fn line_text(&self, line_offset: usize) -> &[u8] {
        let rest = self.view_from(line_offset);
        let end = rest
            .iter()
            .position(|&b| b == b'\r' || b == b'\n')
            .unwrap_or(rest.len());
        &rest[..end]
    }
}
