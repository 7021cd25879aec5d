use super::types::Config;
use crate::task::Filter;

/// Apply `TICKOFF_*` variables looked up through `var`.
///
/// Values that do not parse are ignored and the previous setting is kept.
pub(super) fn apply_env<F>(config: &mut Config, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = var("TICKOFF_STORE") {
        config.files_store = val;
    }
    if let Some(val) = var("TICKOFF_LOG") {
        config.files_log = val;
    }
    if let Some(val) = var("TICKOFF_LOG_MAX_LINES") {
        if let Ok(n) = val.parse() {
            config.log_max_lines = n;
        }
    }
    if let Some(val) = var("TICKOFF_FILTER") {
        if let Some(filter) = Filter::parse(&val) {
            config.ui_filter = filter;
        }
    }
    if let Some(val) = var("TICKOFF_CONFIRM_DELETE") {
        config.ui_confirm_delete = !(val == "false" || val == "0");
    }
    if let Some(val) = var("TICKOFF_EPHEMERAL") {
        config.ephemeral = val == "true" || val == "1";
    }
}
