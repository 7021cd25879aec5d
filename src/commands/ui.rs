use tickoff::color;
use tickoff::config::Config;
use tickoff::task;
use tickoff::tui::{run_tui, TuiApp};

use super::session;

/// Open the interactive list.
pub fn cmd_ui(config: &Config) -> Result<(), String> {
    let logger = session::logger(config);
    if let Some(ref logger) = logger {
        // The log is best effort; it never keeps the list from opening
        let _ = logger.log_session_start();
    }

    let controller = session::open_controller(config, logger)?;
    let app = TuiApp::new(controller).with_confirm_delete(config.ui_confirm_delete);

    let app = run_tui(app).map_err(|e| format!("terminal error: {}", e))?;

    // One-line summary once the terminal is back
    let tasks = app.controller().tasks().map_err(|e| e.to_string())?;
    println!(
        "{} active, {} completed",
        color::number(task::active_count(&tasks)),
        color::completed(&task::completed_count(&tasks).to_string())
    );
    Ok(())
}
