//! Clipboard access
//!
//! Flows only see the [`Clipboard`] trait. The TUI uses [`SystemClipboard`]
//! (arboard); tests use [`MemoryClipboard`].

use crate::errors::{Result, ShortlinkError};

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn get_text(&mut self) -> Result<String>;
}

/// Process-local clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail_writes: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail_writes: true,
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail_writes {
            return Err(ShortlinkError::clipboard("clipboard is not writable"));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn get_text(&mut self) -> Result<String> {
        self.contents
            .clone()
            .ok_or_else(|| ShortlinkError::clipboard("clipboard is empty"))
    }
}

/// The desktop clipboard
///
/// The handle is opened on first use and kept for the lifetime of the value;
/// on X11 the copied text is only served while a handle is alive.
#[cfg(feature = "clipboard")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ShortlinkError::clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ShortlinkError::clipboard("clipboard unavailable"))
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text)
            .map_err(|e| ShortlinkError::clipboard(e.to_string()))
    }

    fn get_text(&mut self) -> Result<String> {
        self.handle()?
            .get_text()
            .map_err(|e| ShortlinkError::clipboard(e.to_string()))
    }
}
