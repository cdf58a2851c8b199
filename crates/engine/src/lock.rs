// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-holder guard for deployments

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Allows at most one active deployment per dashboard.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct DeployLock {
    held: Arc<AtomicBool>,
}

impl DeployLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock, or `None` if another deployment holds it
    pub fn try_acquire(&self) -> Option<DeployGuard> {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| DeployGuard {
                held: Arc::clone(&self.held),
            })
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

/// Releases the deploy lock on drop
#[derive(Debug)]
pub struct DeployGuard {
    held: Arc<AtomicBool>,
}

impl Drop for DeployGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
    }
}
