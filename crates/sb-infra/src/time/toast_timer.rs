use std::collections::HashMap;
use std::sync::Arc;

use sb_core::ports::ToastTimerPort;
use sb_core::{ToastExpiry, ToastKind};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep, Duration};
use tracing::debug;

/// One pending dismissal per toast kind, delivered on `expired`.
pub struct ToastTimer {
    timers: Arc<Mutex<HashMap<ToastKind, tokio::task::AbortHandle>>>,
    expired: mpsc::UnboundedSender<ToastExpiry>,
}

impl ToastTimer {
    pub fn new(expired: mpsc::UnboundedSender<ToastExpiry>) -> Self {
        Self {
            timers: Arc::new(Mutex::new(HashMap::new())),
            expired,
        }
    }
}

#[async_trait::async_trait]
impl ToastTimerPort for ToastTimer {
    async fn schedule(&self, expiry: ToastExpiry, ttl: Duration) -> anyhow::Result<()> {
        let kind = expiry.kind;
        let timers = Arc::clone(&self.timers);
        let expired = self.expired.clone();

        let mut timers_guard = self.timers.lock().await;
        if let Some(existing) = timers_guard.remove(&kind) {
            existing.abort();
        }

        let handle = tokio::spawn(async move {
            sleep(ttl).await;
            timers.lock().await.remove(&kind);
            // Receiver gone means the UI has shut down.
            let _ = expired.send(expiry);
        });

        timers_guard.insert(kind, handle.abort_handle());
        debug!(
            toast = %kind,
            generation = expiry.generation,
            ttl_ms = ttl.as_millis() as u64,
            "toast dismissal scheduled"
        );
        Ok(())
    }
}
