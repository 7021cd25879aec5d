//! Termination signal handling.
//!
//! While the TUI runs the terminal is in raw mode, so Ctrl+C arrives as a key
//! press. SIGTERM and SIGHUP (and SIGINT outside raw mode) go through the
//! handler registered here, which only sets a flag. The event loop polls the
//! flag and leaves through the normal path, restoring the terminal.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag indicating shutdown has been requested.
static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Register the signal handler.
///
/// Should be called once at program startup.
pub fn register_handler() -> Result<(), String> {
    ctrlc::set_handler(|| {
        SHUTDOWN_REQUESTED.store(true, Ordering::SeqCst);
    })
    .map_err(|e| format!("failed to register signal handler: {}", e))
}

/// Check if shutdown has been requested.
pub fn requested() -> bool {
    SHUTDOWN_REQUESTED.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only this test installs a handler in the test process.
    #[test]
    fn test_register_handler_once() {
        assert!(register_handler().is_ok());
        assert!(!requested());

        let err = register_handler().unwrap_err();
        assert!(err.starts_with("failed to register signal handler"));
        assert!(!requested());
    }
}
