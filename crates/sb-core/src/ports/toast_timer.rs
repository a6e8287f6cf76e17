use std::time::Duration;

use async_trait::async_trait;

use crate::toast::ToastExpiry;

/// Deferred toast dismissal.
///
/// After `ttl` the expiry is handed back to the session. Scheduling a
/// kind that is already pending replaces the pending dismissal.
#[async_trait]
pub trait ToastTimerPort: Send + Sync {
    async fn schedule(&self, expiry: ToastExpiry, ttl: Duration) -> anyhow::Result<()>;
}
