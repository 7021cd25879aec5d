use std::fs;
use std::path::Path;

use tickoff::config::{Config, CONFIG_FILE};

/// Write a default `tickoff.toml` in the current directory.
pub fn cmd_init(force: bool) -> Result<(), String> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            CONFIG_FILE
        ));
    }

    fs::write(path, Config::default_toml())
        .map_err(|e| format!("failed to create {}: {}", CONFIG_FILE, e))?;
    println!("Created {}", CONFIG_FILE);
    println!("  Tasks are stored in the file named by files.store.");
    Ok(())
}
