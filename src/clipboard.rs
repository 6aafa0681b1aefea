//! Clipboard integration.

use crate::error::Result;
use crate::router::Location;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy a location (path and anchor) to clipboard.
pub fn copy_location(location: &Location) -> Result<()> {
    tracing::debug!("Copying location {}", location);
    copy_to_clipboard(&location.to_string())
}
