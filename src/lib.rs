pub mod forms;
pub mod issue;
pub mod logging;
pub mod model;
pub mod store;
pub mod submit;
pub mod tui;

mod tui_shell;
