//! The `verify` command: plan each layout, replay the plan in the simulator,
//! and check the result.

use std::path::Path;

use rayon::prelude::*;

use crate::layout::{Layout, LayoutError};
use crate::modes::ModeName;
use crate::sort::{plan_sort, verify_sort, SortReport};

/// Verify every layout in `paths` in parallel, printing one line per file.
///
/// Returns `true` if every file loaded and passed.
pub fn verify_files(paths: &[String], mode: Option<ModeName>) -> bool {
    let results: Vec<Result<SortReport, LayoutError>> = paths
        .par_iter()
        .map(|path| {
            let layout = Layout::load(Path::new(path))?;
            let planned = plan_sort(&layout, mode.unwrap_or(layout.mode));
            Ok(verify_sort(&layout, &planned))
        })
        .collect();

    let mut failures = 0usize;
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(report) => {
                if !report.passed() {
                    failures += 1;
                }
                println!("{}", render_report(path, &report));
            }
            Err(e) => {
                failures += 1;
                eprintln!("error: {path}: {e}");
            }
        }
    }

    tracing::debug!(files = paths.len(), failures, "verified layouts");
    if paths.len() > 1 {
        println!();
        println!("{} passed, {failures} failed", paths.len() - failures);
    }
    failures == 0
}

/// One line describing `report`.
pub fn render_report(path: &str, report: &SortReport) -> String {
    if report.passed() {
        return format!(
            "ok: {path} ({} pickups, partial stacks {} -> {})",
            report.pickups, report.partials_before, report.partials_after
        );
    }

    let mut problems = Vec::new();
    if !report.conserved {
        problems.push("items not conserved");
    }
    if !report.cursor_empty {
        problems.push("cursor left holding items");
    }
    if !report.as_planned {
        problems.push("scope differs from the plan");
    }
    if !report.ordered {
        problems.push("scope out of order");
    }
    if !report.outside_untouched {
        problems.push("slots outside the scope changed");
    }
    format!("FAIL: {path} ({})", problems.join(", "))
}
