//! Request-level bound on generation work.
//!
//! The provider sets no timeout of its own, so every handler that waits on
//! generation runs it through [`within`].

use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

use crate::ports::AIError;

/// Generation budget per request when none is configured.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs `work`, giving up with `AIError::Timeout` once `limit` has elapsed.
pub(crate) async fn within<F: Future>(limit: Duration, work: F) -> Result<F::Output, AIError> {
    timeout(limit, work).await.map_err(|_| AIError::Timeout {
        timeout_secs: whole_secs(limit),
    })
}

/// Seconds in `limit`, rounded up.
fn whole_secs(limit: Duration) -> u32 {
    let secs = limit.as_secs() + u64::from(limit.subsec_nanos() > 0);
    u32::try_from(secs).unwrap_or(u32::MAX)
}
