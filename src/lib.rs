pub mod address;
pub mod controller;
pub mod detail;
pub mod logging;
pub mod model;
pub mod resolve;
pub mod selector;
pub mod table;
pub mod tui;
mod tui_shell;
