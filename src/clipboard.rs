use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Destination the collected buffer is handed to.
pub trait ClipboardSink {
    fn set_text(&self, text: String) -> Result<(), ClipboardError>;
}

pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: String) -> Result<(), ClipboardError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text))
            .map_err(|err| ClipboardError(err.to_string()))?;
        // Clipboard managers need a moment to take ownership before exit.
        thread::sleep(Duration::from_millis(500));
        Ok(())
    }
}
