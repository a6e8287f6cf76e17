use anyhow::Result;

/// Write access to the operating system clipboard.
pub trait SystemClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}
