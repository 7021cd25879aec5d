pub mod init;
pub mod list;
pub mod session;
pub mod status;
pub mod tasks;
pub mod ui;

pub use init::cmd_init;
pub use list::cmd_list;
pub use status::cmd_status;
pub use tasks::{cmd_add, cmd_done, cmd_edit, cmd_rm, cmd_theme};
pub use ui::cmd_ui;
