//! Planning a layout's sort and checking the plan against the simulator.

use csort_exchange::Inventory;
use csort_plan::{
    Batch, InteractionQueue, InteractionSink, Scope, SortContext, Sorter, TriggerType,
};
use csort_stack::ItemStack;

use crate::layout::Layout;
use crate::modes::{sort_mode, ModeName};
use crate::screen::{ClickEvent, LayoutScreen};

/// The result of planning one sort over a layout.
#[derive(Clone, Debug)]
pub struct PlannedSort {
    pub mode: ModeName,
    /// Layout slots in the origin's scope, in layout order.
    pub slots: Vec<usize>,
    /// `sorted_ids[i]` is the scope-local index whose stack ends at `slots[i]`.
    pub sorted_ids: Vec<usize>,
    pub batches: Vec<Batch<ClickEvent>>,
    /// What `slots` should hold once every batch has run.
    pub expected: Vec<ItemStack>,
}

impl PlannedSort {
    pub fn pickup_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.events.len()).sum()
    }

    /// Every pickup, in send order.
    pub fn clicks(&self) -> impl Iterator<Item = usize> + '_ {
        self.batches
            .iter()
            .flat_map(|batch| batch.events.iter().map(|event| event.slot))
    }
}

/// Plan a full sort of the scope containing `layout.origin`.
///
/// The sort ends with a [`TriggerType::Tick`], so every batch carries a
/// trigger.
pub fn plan_sort(layout: &Layout, mode: ModeName) -> PlannedSort {
    let screen = LayoutScreen::new(layout);
    let mut sorter = Sorter::new(&screen, layout.origin);
    let order = sort_mode(mode, &layout.names);

    let mut queue = InteractionQueue::new();
    let (plan, sorted_ids) = sorter.plan(order.as_ref());
    plan.emit(&screen, sorter.slots(), &mut queue);
    queue.trigger_send(TriggerType::Tick);

    let planned = PlannedSort {
        mode,
        slots: sorter.slots().to_vec(),
        sorted_ids,
        batches: queue.into_batches(),
        expected: sorter.stacks().to_vec(),
    };
    tracing::debug!(
        mode = %mode,
        slots = planned.slots.len(),
        pickups = planned.pickup_count(),
        batches = planned.batches.len(),
        "planned layout sort"
    );
    planned
}

/// What replaying a [`PlannedSort`] against the simulator showed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortReport {
    pub pickups: usize,
    /// Per-kind totals are unchanged.
    pub conserved: bool,
    /// The cursor is empty at the end.
    pub cursor_empty: bool,
    /// The scope holds exactly what the planner predicted.
    pub as_planned: bool,
    /// The scope is in the mode's order.
    pub ordered: bool,
    /// No slot outside the scope changed.
    pub outside_untouched: bool,
    pub partials_before: usize,
    pub partials_after: usize,
}

impl SortReport {
    pub fn passed(&self) -> bool {
        self.conserved
            && self.cursor_empty
            && self.as_planned
            && self.ordered
            && self.outside_untouched
    }
}

/// Replay `planned` over the layout's contents and check the outcome.
pub fn verify_sort(layout: &Layout, planned: &PlannedSort) -> SortReport {
    let before = Inventory::new(layout.stacks.clone());
    let mut after = before.clone();
    after.run(planned.clicks());

    let scope_contents: Vec<ItemStack> =
        planned.slots.iter().map(|&slot| after.slot(slot)).collect();

    let as_planned = scope_contents == planned.expected;
    let outside_untouched = (0..layout.stacks.len())
        .filter(|slot| !planned.slots.contains(slot))
        .all(|slot| after.slot(slot) == layout.stacks[slot]);

    // Modes sort stably, so a row already in order sorts to the identity.
    let ids: Vec<usize> = (0..scope_contents.len()).collect();
    let scope = layout
        .scopes
        .get(layout.origin)
        .copied()
        .unwrap_or(Scope::INVALID);
    let context = SortContext::new(scope, scope_contents.len());
    let mode = sort_mode(planned.mode, &layout.names);
    let ordered = mode.sort(ids.clone(), &scope_contents, &context) == ids;

    SortReport {
        pickups: planned.pickup_count(),
        conserved: after.totals() == before.totals(),
        cursor_empty: after.cursor().is_empty(),
        as_planned,
        ordered,
        outside_untouched,
        partials_before: before.partial_stacks(),
        partials_after: after.partial_stacks(),
    }
}
