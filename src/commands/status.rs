use tickoff::color;
use tickoff::config::Config;
use tickoff::task;

use super::session;

/// Log lines shown under "Recent Activity".
const RECENT_LINES: usize = 5;

/// Show task counts and the current theme.
pub fn cmd_status(config: &Config) -> Result<(), String> {
    let controller = session::open_controller(config, None)?;
    let tasks = controller.tasks().map_err(|e| e.to_string())?;

    let location = if config.ephemeral {
        "in memory".to_string()
    } else {
        config.files_store.clone()
    };
    println!("{} ({}):", color::label("Task Status"), location);
    println!("  Active:    {}", color::warning(&task::active_count(&tasks).to_string()));
    println!("  Completed: {}", color::completed(&task::completed_count(&tasks).to_string()));
    println!("  Total:     {}", color::number(tasks.len()));

    let theme = controller.theme();
    println!("\n{} {} {}", color::label("Theme:"), theme.as_str(), theme.icon());

    // Recent log lines
    if let Some(logger) = session::logger(config) {
        println!("\n{} ({}):", color::label("Recent Activity"), logger.path.display());
        match logger.read_recent(RECENT_LINES) {
            Ok(lines) => {
                let entries: Vec<String> = lines.into_iter().filter(|l| l.contains(" | ")).collect();
                if entries.is_empty() {
                    println!("  {}", color::muted("(no activity)"));
                }
                for line in entries {
                    println!("  {}", color::muted(&line));
                }
            }
            Err(e) => println!("  {}", color::warning(&format!("(error reading log: {})", e))),
        }
    }

    Ok(())
}
