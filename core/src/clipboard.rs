//! Clipboard operations for placing the exported command string on the
//! system clipboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    AccessFailed(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

use clipboard_rs::{Clipboard, ClipboardContext};

/// Write text to clipboard.
pub(crate) fn write_text(text: &str) -> Result<(), ClipboardError> {
    let ctx = ClipboardContext::new().map_err(|e| ClipboardError::AccessFailed(e.to_string()))?;

    ctx.set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}
