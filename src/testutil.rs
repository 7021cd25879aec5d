//! Shared helpers for unit tests.

use std::sync::Mutex;

use tempfile::TempDir;

/// Serializes tests that change the process working directory.
pub static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with a fresh temporary directory as the working directory.
///
/// The original directory is restored afterwards and the temp directory is
/// removed when it goes out of scope.
pub fn with_temp_cwd<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::current_dir().expect("failed to get current directory");
    let temp = TempDir::new().expect("failed to create temp directory");
    std::env::set_current_dir(temp.path()).expect("failed to change to temp directory");
    let result = f();
    std::env::set_current_dir(original).expect("failed to restore original directory");
    result
}
