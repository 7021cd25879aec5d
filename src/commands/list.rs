use tickoff::color;
use tickoff::config::Config;

use super::session;

/// Print the tasks matching the configured filter.
pub fn cmd_list(config: &Config) -> Result<(), String> {
    let controller = session::open_controller(config, None)?;

    println!(
        "{} {}",
        color::label("To-Do List"),
        color::muted(&format!("({})", controller.filter().label()))
    );
    for line in color::view_lines(controller.view()) {
        println!("  {}", line);
    }

    Ok(())
}
