//! Preparing user text before it reaches the translator.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Longest input accepted for a single translation, in characters
pub const MAX_INPUT_CHARS: usize = 5000;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{} is a {} document; copy and paste its text instead", path.display(), extension)]
    UnsupportedDocument { path: PathBuf, extension: String },

    #[error("{} is not a supported file type (expected a .txt file)", path.display())]
    UnsupportedFileType { path: PathBuf },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Truncate `text` to at most [`MAX_INPUT_CHARS`] characters.
pub fn clamp_to_limit(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((cut, _)) => {
            debug!("Input truncated to {} characters", MAX_INPUT_CHARS);
            &text[..cut]
        }
        None => text,
    }
}

/// Load a plain text document as translation input, clamped to the size limit.
///
/// Word and PDF documents are recognised but not parsed.
pub fn read_text_file(path: &Path) -> Result<String, InputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "text" => {}
        "pdf" | "doc" | "docx" => {
            return Err(InputError::UnsupportedDocument {
                path: path.to_path_buf(),
                extension: extension.to_uppercase(),
            })
        }
        _ => {
            return Err(InputError::UnsupportedFileType {
                path: path.to_path_buf(),
            })
        }
    }

    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(clamp_to_limit(&contents).to_string())
}
