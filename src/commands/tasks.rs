use tickoff::color;
use tickoff::config::Config;
use tickoff::controller::TaskController;
use tickoff::prompt::StdioPrompter;
use tickoff::task;

use super::session::{self, Store};

fn open(config: &Config) -> Result<TaskController<Store>, String> {
    session::open_controller(config, session::logger(config))
}

/// Fail with a readable message when `id` names no task.
fn require_task(controller: &TaskController<Store>, id: i64) -> Result<task::Task, String> {
    let tasks = controller.tasks().map_err(|e| e.to_string())?;
    task::find(&tasks, id)
        .cloned()
        .ok_or_else(|| format!("no task with id {}", id))
}

/// Add a task from the words given on the command line.
pub fn cmd_add(config: &Config, words: &[String]) -> Result<(), String> {
    let mut controller = open(config)?;
    match controller.add_text(&words.join(" ")).map_err(|e| e.to_string())? {
        Some(id) => println!("{} task {}", color::success("Added"), color::number(format!("#{}", id))),
        None => println!("{}", color::warning("Nothing added: task text is empty")),
    }
    Ok(())
}

/// Toggle completion of a task.
pub fn cmd_done(config: &Config, id: i64) -> Result<(), String> {
    let mut controller = open(config)?;
    if !controller.toggle_complete(id).map_err(|e| e.to_string())? {
        return Err(format!("no task with id {}", id));
    }

    let task = require_task(&controller, id)?;
    let state = if task.completed {
        color::completed("completed")
    } else {
        color::warning("active")
    };
    println!("Task {} is now {}", color::number(format!("#{}", id)), state);
    Ok(())
}

/// Edit the text of a task, prompting on stdin.
pub fn cmd_edit(config: &Config, id: i64) -> Result<(), String> {
    let mut controller = open(config)?;
    require_task(&controller, id)?;

    let mut prompter = StdioPrompter::stdio(false);
    let changed = controller.edit(id, &mut prompter).map_err(|e| e.to_string())?;
    if changed {
        println!("{} task {}", color::success("Updated"), color::number(format!("#{}", id)));
    } else {
        println!("Task {} unchanged", color::number(format!("#{}", id)));
    }
    Ok(())
}

/// Delete a task after confirmation on stdin, or straight away with `--yes`
/// or `ui.confirm_delete = false`.
pub fn cmd_rm(config: &Config, id: i64, yes: bool) -> Result<(), String> {
    let mut controller = open(config)?;
    require_task(&controller, id)?;

    let mut prompter = StdioPrompter::stdio(yes || !config.ui_confirm_delete);
    let deleted = controller.delete(id, &mut prompter).map_err(|e| e.to_string())?;
    if deleted {
        println!("{} task {}", color::success("Deleted"), color::number(format!("#{}", id)));
    } else {
        println!("Task {} kept", color::number(format!("#{}", id)));
    }
    Ok(())
}

/// Switch between light and dark theme and print the new one.
pub fn cmd_theme(config: &Config) -> Result<(), String> {
    let mut controller = open(config)?;
    let theme = controller.toggle_theme().map_err(|e| e.to_string())?;
    println!("{} {} {}", color::label("Theme:"), theme.as_str(), theme.icon());
    Ok(())
}
