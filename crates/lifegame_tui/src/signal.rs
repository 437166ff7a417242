//! Cooperative interruption of the render loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A one-shot flag shared between a signal listener and the render loop.
///
/// Triggering is idempotent: a second Ctrl-C before the loop notices the first
/// changes nothing.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    triggered: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        if !self.triggered.swap(true, Ordering::SeqCst) {
            tracing::info!("Interrupt requested");
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Spawns a task on the current tokio runtime that triggers this flag on
    /// Ctrl-C.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn listen_for_ctrl_c(&self) -> tokio::task::JoinHandle<()> {
        let interrupt = self.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                    interrupt.trigger();
                }
                Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C"),
            }
        })
    }
}
