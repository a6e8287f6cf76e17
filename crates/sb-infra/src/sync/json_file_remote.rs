use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sb_core::ports::SnippetRemotePort;
use sb_core::Snippet;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct RemoteDocument {
    #[serde(default = "format_version")]
    version: u32,
    #[serde(default)]
    snippets: Vec<Snippet>,
}

fn format_version() -> u32 {
    FORMAT_VERSION
}

/// Remote snippet set stored as one JSON document.
///
/// Meant for a folder that some other tool replicates between machines.
/// A missing document is an empty remote.
pub struct JsonFileRemote {
    path: PathBuf,
}

impl JsonFileRemote {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnippetRemotePort for JsonFileRemote {
    async fn pull(&self) -> Result<Vec<Snippet>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Remote document missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e).with_context(|| format!("read remote failed: {}", self.path.display())),
        };

        let document: RemoteDocument = serde_json::from_str(&content)
            .with_context(|| format!("parse remote failed: {}", self.path.display()))?;
        anyhow::ensure!(
            document.version <= FORMAT_VERSION,
            "remote {} uses unsupported format version {}",
            self.path.display(),
            document.version
        );
        Ok(document.snippets)
    }

    async fn push(&self, snippets: &[Snippet]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create remote dir failed: {}", dir.display()))?;
        }

        let document = RemoteDocument {
            version: FORMAT_VERSION,
            snippets: snippets.to_vec(),
        };
        let content = serde_json::to_string_pretty(&document).context("serialize remote failed")?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp remote failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| format!("replace remote failed: {}", self.path.display()))?;

        debug!(path = %self.path.display(), count = snippets.len(), "Remote document written");
        Ok(())
    }
}
