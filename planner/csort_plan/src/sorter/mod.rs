//! One sort invocation over one scope of a container screen.

use csort_stack::ItemStack;

use crate::combine::combine_stacks;
use crate::mode::{SortContext, SortMode};
use crate::permute::apply_permutation;
use crate::plan::Plan;
use crate::screen::{Scope, ScreenHelper};
use crate::sink::InteractionSink;

/// Sorts the slots sharing a scope with an origin slot.
///
/// Owns a snapshot of the slot contents taken at construction. The passes
/// update the snapshot as they plan, so it always reflects what the slots
/// will hold once the emitted pickups have run.
pub struct Sorter<'h, H: ScreenHelper> {
    helper: &'h H,
    scope: Scope,
    slots: Vec<H::Slot>,
    stacks: Vec<ItemStack>,
}

impl<'h, H: ScreenHelper> Sorter<'h, H> {
    /// Collect every menu slot in the same scope as `origin`.
    ///
    /// An origin outside any sortable scope yields an empty sorter, for
    /// which every operation is a no-op.
    pub fn new(helper: &'h H, origin: H::Slot) -> Self {
        let scope = helper.scope(origin, false);
        let slots: Vec<H::Slot> = if scope.is_valid() {
            helper
                .menu_slots()
                .iter()
                .copied()
                .filter(|&slot| helper.scope(slot, true) == scope)
                .collect()
        } else {
            Vec::new()
        };
        let stacks = slots.iter().map(|&slot| helper.stack(slot)).collect();

        tracing::debug!(scope = scope.raw(), slots = slots.len(), "collected slots");

        Sorter {
            helper,
            scope,
            slots,
            stacks,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Host slots in scope, in menu order. Index `i` of every plan refers to
    /// `slots()[i]`.
    pub fn slots(&self) -> &[H::Slot] {
        &self.slots
    }

    /// The current snapshot.
    pub fn stacks(&self) -> &[ItemStack] {
        &self.stacks
    }

    /// Merge partial stacks and send the merges to `sink`.
    pub fn combine_stacks<S: InteractionSink<H::Event>>(&mut self, sink: &mut S) {
        let mut plan = Plan::new();
        combine_stacks(&mut self.stacks, &mut plan);
        plan.emit(self.helper, &self.slots, sink);
    }

    /// Plan a full sort without emitting it: consolidation, then the order
    /// chosen by `mode`, then the pickups that realize it.
    ///
    /// Returns the plan and the order `mode` chose.
    pub fn plan(&mut self, mode: &dyn SortMode) -> (Plan, Vec<usize>) {
        let mut plan = Plan::new();
        if self.slots.len() <= 1 {
            let ids = (0..self.slots.len()).collect();
            return (plan, ids);
        }

        combine_stacks(&mut self.stacks, &mut plan);

        let ids: Vec<usize> = (0..self.stacks.len()).collect();
        let context = SortContext::new(self.scope, self.slots.len());
        let sorted_ids = mode.sort(ids, &self.stacks, &context);

        apply_permutation(&self.stacks, &sorted_ids, &mut plan);
        self.stacks = sorted_ids.iter().map(|&origin| self.stacks[origin]).collect();

        tracing::debug!(pickups = plan.pickup_count(), "planned sort");
        (plan, sorted_ids)
    }

    /// Sort the scope with `mode` and send every pickup to `sink`.
    pub fn sort<S: InteractionSink<H::Event>>(&mut self, mode: &dyn SortMode, sink: &mut S) {
        let (plan, _) = self.plan(mode);
        plan.emit(self.helper, &self.slots, sink);
    }

    /// Rearrange the snapshot into `sorted_ids` without consolidating first,
    /// sending the pickups to `sink`.
    ///
    /// Only correct if the snapshot has at most one partial stack per kind,
    /// as left by [`Sorter::combine_stacks`].
    pub fn sort_on_client<S: InteractionSink<H::Event>>(
        &mut self,
        sorted_ids: &[usize],
        sink: &mut S,
    ) {
        let mut plan = Plan::new();
        apply_permutation(&self.stacks, sorted_ids, &mut plan);
        self.stacks = sorted_ids.iter().map(|&origin| self.stacks[origin]).collect();
        plan.emit(self.helper, &self.slots, sink);
    }
}
