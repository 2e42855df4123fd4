//! Copying results out of the calculator.

use arboard::Clipboard;
use tracing::debug;

use crate::{Error, Result};

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(clipboard_error("open clipboard"))?;
    clipboard
        .set_text(text)
        .map_err(clipboard_error("set clipboard text"))?;

    debug!(text, "copied to clipboard");
    Ok(())
}

fn clipboard_error(action: &'static str) -> impl Fn(arboard::Error) -> Error {
    move |e| Error::Clipboard(format!("failed to {action}: {e}"))
}
