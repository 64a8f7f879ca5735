// SPDX-License-Identifier: Apache-2.0

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Per-process double-submit latch. Holding a token means a submission is in
/// flight; a second `begin` returns `None` until the token drops. This guards
/// only the local process; a different client racing on the same row is an
/// accepted property of the backing store.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    submitting: Arc<AtomicBool>,
}

impl SubmitGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn begin(&self) -> Option<SubmitToken> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Some(SubmitToken {
                submitting: Arc::clone(&self.submitting),
            })
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }
}

/// Releases the latch on drop, including on error paths, so the submit flag
/// always resets regardless of outcome.
#[derive(Debug)]
pub struct SubmitToken {
    submitting: Arc<AtomicBool>,
}

impl Drop for SubmitToken {
    fn drop(&mut self) {
        self.submitting.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submit_is_blocked_until_the_token_drops() {
        let guard = SubmitGuard::new();
        let token = guard.begin().expect("first submit");
        assert!(guard.begin().is_none());
        assert!(guard.is_submitting());
        drop(token);
        assert!(!guard.is_submitting());
        assert!(guard.begin().is_some());
    }
}
