mod branding;
mod command;
mod help;

pub use self::branding::Branding;
pub use self::command::{CellText, CommandSpec};
pub use self::help::{ApplicabilityTable, HelpDocument, PluginDetail};

#[cfg(test)]
#[path = "../tests/model/help_tests.rs"]
mod tests;
