// src/clipboard.rs
use std::time::Duration;

use clipboard::{ClipboardContext, ClipboardProvider};

use crate::error::{AppError, Result};

/// Somewhere a generated password can be handed off to.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Keeps the written text available for `duration` before the caller
    /// goes away. Sinks that outlive the process need nothing here.
    fn hold(&mut self, _duration: Duration) -> Result<()> {
        Ok(())
    }
}

/// The desktop clipboard.
///
/// On X11 the selection is served by the context that set it, so the
/// context is kept for as long as this value lives.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
    last_written: Option<String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext> {
        if self.ctx.is_none() {
            let ctx: ClipboardContext = ClipboardProvider::new()
                .map_err(|e| AppError::Clipboard(format!("init failed: {}", e)))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| AppError::Clipboard("no clipboard context".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.context()?
            .set_contents(text.to_string())
            .map_err(|e| AppError::Clipboard(format!("write failed: {}", e)))?;

        self.last_written = Some(text.to_string());
        log::debug!("Copied {} characters to the clipboard", text.chars().count());
        Ok(())
    }

    /// Blocks for `duration`, then clears the clipboard if it still holds
    /// what was last written.
    fn hold(&mut self, duration: Duration) -> Result<()> {
        if duration.is_zero() {
            return Ok(());
        }

        eprintln!("⏳ Clipboard kept for {} s", duration.as_secs());
        std::thread::sleep(duration);

        let Some(written) = self.last_written.take() else {
            return Ok(());
        };
        let ctx = self.context()?;
        if ctx.get_contents().ok().as_deref() == Some(written.as_str()) {
            ctx.set_contents(String::new())
                .map_err(|e| AppError::Clipboard(format!("clear failed: {}", e)))?;
            log::debug!("Clipboard cleared");
        }
        Ok(())
    }
}

/// Records writes and holds instead of touching the desktop.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub held: Vec<Duration>,
}

#[cfg(test)]
impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn hold(&mut self, duration: Duration) -> Result<()> {
        self.held.push(duration);
        Ok(())
    }
}
