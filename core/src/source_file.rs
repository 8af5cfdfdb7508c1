//! # Source File I/O
//!
//! Whole-file UTF-8 reads and writes. A leading byte-order mark survives the
//! round trip; anything that is not UTF-8 is rejected.

use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decoded file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// Text without the byte-order mark.
    pub text: String,
    /// Whether the file started with a UTF-8 byte-order mark.
    pub bom: bool,
}

impl SourceText {
    /// Same BOM, new text.
    pub fn with_text(&self, text: String) -> Self {
        Self {
            text,
            bom: self.bom,
        }
    }
}

/// Reads and decodes `path`.
pub fn read_source(path: &Path) -> AppResult<SourceText> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::General(format!("Failed to read file {:?}: {}", path, e)))?;

    let bom = bytes.starts_with(BOM);
    let body = if bom {
        bytes[BOM.len()..].to_vec()
    } else {
        bytes
    };

    let text = String::from_utf8(body).map_err(|_| AppError::Encoding(path.to_path_buf()))?;
    Ok(SourceText { text, bom })
}

/// Writes `source` back to `path`, truncating it first.
pub fn write_source(path: &Path, source: &SourceText) -> AppResult<()> {
    let mut bytes = Vec::with_capacity(source.text.len() + BOM.len());
    if source.bom {
        bytes.extend_from_slice(BOM);
    }
    bytes.extend_from_slice(source.text.as_bytes());

    fs::write(path, bytes)
        .map_err(|e| AppError::General(format!("Failed to write file {:?}: {}", path, e)))
}
