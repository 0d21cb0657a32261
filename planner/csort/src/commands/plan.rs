//! The `plan` command: print the pickups that sort a layout.

use std::fmt::Write as _;

use csort_plan::TriggerType;

use crate::layout::Layout;
use crate::modes::ModeName;
use crate::sort::{plan_sort, PlannedSort};

use super::load_layout;

/// Plan the sort of the layout at `path` and print it.
///
/// `mode` overrides the layout's own mode.
pub fn plan_file(path: &str, mode: Option<ModeName>) {
    let layout = load_layout(path);
    let planned = plan_sort(&layout, mode.unwrap_or(layout.mode));
    print!("{}", render_plan(&layout, &planned));
}

/// Render the batches of `planned` and the arrangement they leave behind.
pub fn render_plan(layout: &Layout, planned: &PlannedSort) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "mode {}, {} of {} slots in scope",
        planned.mode,
        planned.slots.len(),
        layout.stacks.len()
    );
    for (n, batch) in planned.batches.iter().enumerate() {
        let slots: Vec<String> = batch.events.iter().map(|e| e.slot.to_string()).collect();
        let trigger = match batch.trigger {
            Some(TriggerType::GuiConfirm) => "confirm",
            Some(TriggerType::Tick) => "tick",
            None => "unsent",
        };
        let _ = writeln!(out, "batch {} [{trigger}]: {}", n + 1, slots.join(" "));
    }
    let _ = writeln!(
        out,
        "{} pickups in {} batches",
        planned.pickup_count(),
        planned.batches.len()
    );

    let mut arrangement = layout.stacks.clone();
    for (&slot, &stack) in planned.slots.iter().zip(&planned.expected) {
        arrangement[slot] = stack;
    }
    out.push('\n');
    for (slot, stack) in arrangement.iter().enumerate() {
        let _ = writeln!(out, "{slot:>3}  {}", layout.names.describe(stack));
    }
    out
}
