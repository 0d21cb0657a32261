//! Command handlers for the `csort` CLI.

use std::path::Path;

use crate::layout::Layout;

mod plan;
mod verify;

pub use plan::{plan_file, render_plan};
pub use verify::{render_report, verify_files};

/// Load a layout, or report the error and exit.
fn load_layout(path: &str) -> Layout {
    match Layout::load(Path::new(path)) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
