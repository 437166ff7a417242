//! Graceful shutdown handling for a play session.
//!
//! Installs the Ctrl+C listener for the lifetime of one session and hands the
//! render loop the flag it polls.

use lifegame_tui::Interrupt;
use tokio::task::JoinHandle;

/// Manages graceful shutdown of a session.
#[derive(Debug, Default)]
pub struct ShutdownManager {
    interrupt: Interrupt,
    listener: Option<JoinHandle<()>>,
}

impl ShutdownManager {
    /// Creates a new shutdown manager with no listener installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts listening for Ctrl+C on the current tokio runtime. Installing
    /// twice keeps the first listener.
    pub fn install(&mut self) {
        if self.listener.is_none() {
            self.listener = Some(self.interrupt.listen_for_ctrl_c());
            tracing::debug!("Ctrl+C listener installed");
        }
    }

    /// Stops listening. The flag keeps its current value.
    pub fn uninstall(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
            tracing::debug!("Ctrl+C listener removed");
        }
    }

    /// Returns a handle to the flag polled by the render loop.
    pub fn interrupt(&self) -> Interrupt {
        self.interrupt.clone()
    }
}

impl Drop for ShutdownManager {
    fn drop(&mut self) {
        self.uninstall();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_manager_new() {
        let manager = ShutdownManager::new();
        assert!(!manager.interrupt().is_triggered());
        assert!(manager.listener.is_none());
    }

    #[test]
    fn test_handles_share_the_flag() {
        let manager = ShutdownManager::new();
        let interrupt = manager.interrupt();
        manager.interrupt().trigger();
        assert!(interrupt.is_triggered());
    }

    #[tokio::test]
    async fn test_install_and_uninstall() {
        let mut manager = ShutdownManager::new();
        manager.install();
        manager.install();
        assert!(manager.listener.is_some());
        manager.uninstall();
        assert!(manager.listener.is_none());
        assert!(!manager.interrupt().is_triggered());
    }
}
