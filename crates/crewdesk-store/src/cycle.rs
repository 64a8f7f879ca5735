// SPDX-License-Identifier: Apache-2.0

use std::sync::atomic::{AtomicU64, Ordering};

/// Liveness guard for read cycles. A fetch started before navigation (or
/// before a newer refresh) must not update current state when it finally
/// settles; each cycle takes a generation token and results are accepted only
/// while that token is still current.
#[derive(Debug, Default)]
pub struct CycleGate {
    current: AtomicU64,
}

impl CycleGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, invalidating every earlier token.
    #[must_use]
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.current.load(Ordering::SeqCst) == token
    }
}
