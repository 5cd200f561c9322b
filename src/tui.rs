use anyhow::Result;

use crate::address::MemoryAddress;
use crate::controller::ViewController;

/// Run the interactive plugin help view. Returns the address the view ended
/// on, so the selection can be shared.
pub fn run(view: ViewController<MemoryAddress>) -> Result<String> {
    crate::tui_shell::run(view)
}
