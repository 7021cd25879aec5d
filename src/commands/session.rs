use tickoff::config::Config;
use tickoff::controller::TaskController;
use tickoff::log::AppLogger;
use tickoff::store::{FileStore, KeyValueStore, MemoryStore};

/// The store every command works against.
pub type Store = Box<dyn KeyValueStore>;

/// Application log for this run, or `None` when running ephemeral.
pub fn logger(config: &Config) -> Option<AppLogger> {
    if config.ephemeral {
        return None;
    }
    Some(AppLogger::new(&config.files_log).with_max_lines(config.log_max_lines))
}

/// Build and initialize the controller: saved theme applied, first view
/// rendered under the configured filter.
///
/// Fails when the stored tasks cannot be read; the store file is left as is.
pub fn open_controller(
    config: &Config,
    logger: Option<AppLogger>,
) -> Result<TaskController<Store>, String> {
    let store: Store = if config.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&config.files_store))
    };

    let mut controller = TaskController::new(store).with_filter(config.ui_filter);
    if let Some(logger) = logger {
        controller = controller.with_logger(logger);
    }
    controller.init().map_err(|e| e.to_string())?;
    Ok(controller)
}
