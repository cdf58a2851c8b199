// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced wrappers for consistent observability

use anayat_core::{KeyValueStore, Reporter, StepOutcome, StoreError};

/// Wrapper that logs every sequencer callback before forwarding it
#[derive(Clone)]
pub struct TracedReporter<R> {
    inner: R,
}

impl<R> TracedReporter<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Reporter> Reporter for TracedReporter<R> {
    fn step_started(&mut self, index: usize, name: &str) {
        tracing::info!(index, name, "step started");
        self.inner.step_started(index, name);
    }

    fn progress(&mut self, fraction: f64) {
        tracing::debug!(percent = (fraction * 100.0).round() as u64, "progress");
        self.inner.progress(fraction);
    }

    fn step_finished(&mut self, index: usize, name: &str, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Success => tracing::info!(index, name, "step succeeded"),
            StepOutcome::Failure => tracing::warn!(index, name, "step failed"),
        }
        self.inner.step_finished(index, name, outcome);
    }
}

/// Wrapper that adds tracing to any KeyValueStore
#[derive(Clone)]
pub struct TracedStore<S> {
    inner: S,
}

impl<S> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: KeyValueStore> KeyValueStore for TracedStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let span = tracing::debug_span!("store.get", key);
        let _guard = span.enter();

        let result = self.inner.get(key);
        match &result {
            Ok(value) => tracing::debug!(found = value.is_some(), "read"),
            Err(e) => tracing::error!(error = %e, "read failed"),
        }
        result
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.set", key);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.set(key, value);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(
                bytes = value.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "saved"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "save failed"
            ),
        }
        result
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.remove", key);
        let _guard = span.enter();

        let result = self.inner.remove(key);
        if let Err(e) = &result {
            tracing::error!(error = %e, "remove failed");
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
