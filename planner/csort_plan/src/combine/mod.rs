//! Stack consolidation pass.
//!
//! Merges partial stacks into earlier partial stacks of the same kind before
//! any reordering happens. Fewer partial stacks means fewer slots to move and
//! guarantees the permutation engine's precondition: per kind, at most one
//! stack is below its maximum.
//!
//! # Algorithm
//!
//! Walk slots from last to first. For each partial slot `i`:
//!
//! 1. Plan `pickup(i)`, taking the whole stack onto the cursor.
//! 2. Scan `j` in `0..i`. Each partial same-kind `S[j]` absorbs
//!    `min(S[j].space, remaining)` via `pickup(j)`. Stop at `remaining == 0`.
//! 3. If no `j` absorbed anything, drop the candidate pickups entirely.
//!    Otherwise emit them as one batch followed by a `GuiConfirm` flush, then
//!    put any remainder back with one more `pickup(i)`.
//!
//! `stacks` is updated in place so later passes see post-merge contents.

use csort_stack::ItemStack;
use smallvec::{smallvec, SmallVec};

use crate::plan::Plan;
use crate::sink::TriggerType;

/// Consolidate partial stacks in `stacks`, appending the pickups to `plan`.
pub fn combine_stacks(stacks: &mut [ItemStack], plan: &mut Plan) {
    let mut merged_slots = 0usize;

    for i in (0..stacks.len()).rev() {
        let stack = stacks[i];
        if stack.is_empty() || stack.is_full() {
            continue;
        }

        let mut remaining = stack.count();
        let mut clicks: SmallVec<[usize; 4]> = smallvec![i];

        for j in 0..i {
            let target = stacks[j];
            if target.is_empty() || target.is_full() {
                continue;
            }
            if !stack.is_same_item_same_tag(&target) {
                continue;
            }
            let delta = target.space().min(remaining);
            remaining -= delta;
            stacks[j] = target.with_count(target.count() + delta);
            clicks.push(j);
            if remaining == 0 {
                break;
            }
        }

        if clicks.len() <= 1 {
            continue;
        }

        tracing::trace!(slot = i, into = ?&clicks[1..], remaining, "merging partial stack");
        plan.batch(clicks);
        plan.flush(TriggerType::GuiConfirm);
        merged_slots += 1;

        if remaining > 0 {
            plan.pickup(i);
        }
        stacks[i] = stack.with_count(remaining);
    }

    tracing::debug!(slots = stacks.len(), merged_slots, "combined stacks");
}

#[cfg(test)]
mod tests;
