//! System clipboard access for copying color hex codes.

/// Copies a color's hex code to the system clipboard.
///
/// Returns a status message describing the outcome; clipboard failures are
/// reported rather than propagated since copy is a convenience action.
#[must_use]
pub fn copy_hex(hex: &str) -> String {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(hex.to_string())) {
        Ok(()) => format!("Copied {hex} to clipboard"),
        Err(e) => {
            log::warn!("Clipboard copy failed: {e}");
            format!("Clipboard unavailable ({e})")
        }
    }
}
