//! Command-line driver for the ClientSort planner.
//!
//! Layout files describe a container as TOML (see [`layout`]). The driver
//! presents a layout to the planner as a screen, plans a sort of the origin
//! slot's scope, and can replay the plan in the simulator to check it.

pub mod commands;
pub mod layout;
pub mod modes;
pub mod screen;
pub mod sort;

pub use layout::{ItemNames, Layout, LayoutError};
pub use modes::{sort_mode, ModeName};
pub use screen::{ClickEvent, LayoutScreen};
pub use sort::{plan_sort, verify_sort, PlannedSort, SortReport};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. With `CSORT_LOG_TREE` set as well,
/// spans render as an indented tree instead of flat lines. Logs go to stderr
/// so plans on stdout stay machine-readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        if std::env::var_os("CSORT_LOG_TREE").is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
