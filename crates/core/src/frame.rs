//! Multi-line glyph patterns.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::geometry::Bounds;

/// A block of text lines drawn as one sprite. Spaces are transparent.
///
/// Lines may be ragged; the width is the longest line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<String>,
    size: Bounds,
}

impl Frame {
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        let size = Bounds::new(
            lines.len(),
            lines.iter().map(|line| line.chars().count()).max().unwrap_or(0),
        );
        Self { lines, size }
    }

    /// Read a frame from a text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(&text))
    }

    /// Row count and widest line, in characters.
    pub fn size(&self) -> Bounds {
        self.size
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }
}

/// Bounding box of a text pattern without building a [`Frame`].
pub fn frame_size(text: &str) -> Bounds {
    Frame::new(text).size()
}
