//! Shared test utilities for the planning passes.
//!
//! Stack shorthands, a replay helper backed by the `csort_exchange`
//! simulator, an in-memory [`ScreenHelper`], and proptest strategies.
//! Only compiled in test builds.

use csort_exchange::Inventory;
use csort_stack::{ItemId, ItemStack, Tag};
use proptest::prelude::*;

use crate::plan::Plan;
use crate::screen::{Scope, ScreenHelper};

pub(crate) const ITEM_A: ItemId = ItemId::new(1);
pub(crate) const ITEM_B: ItemId = ItemId::new(2);

/// `A:count`, max 64.
pub(crate) fn a(count: u32) -> ItemStack {
    ItemStack::new(ITEM_A, count, 64)
}

/// `B:count`, max 64.
pub(crate) fn b(count: u32) -> ItemStack {
    ItemStack::new(ITEM_B, count, 64)
}

pub(crate) const EMPTY: ItemStack = ItemStack::EMPTY;

/// Replay `plan` against `stacks` and return the resulting inventory.
pub(crate) fn simulate(stacks: &[ItemStack], plan: &Plan) -> Inventory {
    let mut inv = Inventory::new(stacks.to_vec());
    inv.run(plan.pickups());
    inv
}

/// Host screen backed by plain vectors. Slot handles are menu indices and
/// click events are the clicked menu index.
pub(crate) struct ListScreen {
    slots: Vec<usize>,
    stacks: Vec<ItemStack>,
    scopes: Vec<Scope>,
}

impl ListScreen {
    /// Every slot in scope 0.
    pub(crate) fn new(stacks: Vec<ItemStack>) -> Self {
        let scopes = vec![Scope::new(0); stacks.len()];
        Self::with_scopes(stacks, scopes)
    }

    pub(crate) fn with_scopes(stacks: Vec<ItemStack>, scopes: Vec<Scope>) -> Self {
        assert_eq!(stacks.len(), scopes.len());
        ListScreen {
            slots: (0..stacks.len()).collect(),
            stacks,
            scopes,
        }
    }
}

impl ScreenHelper for ListScreen {
    type Slot = usize;
    type Event = usize;

    fn menu_slots(&self) -> &[usize] {
        &self.slots
    }

    fn stack(&self, slot: usize) -> ItemStack {
        self.stacks[slot]
    }

    fn scope(&self, slot: usize, _prefer_slots: bool) -> Scope {
        self.scopes[slot]
    }

    fn click_event(&self, slot: usize) -> usize {
        slot
    }
}

/// Random slot row over three items, each plain or carrying one of two tags,
/// with a small max, so partial stacks, same-kind collisions and stacks that
/// differ only by tag are all common.
pub(crate) fn layout(max_len: usize) -> impl Strategy<Value = Vec<ItemStack>> {
    let stack = prop_oneof![
        1 => Just(ItemStack::EMPTY),
        3 => (1u32..=3, proptest::option::of(0u32..2), 1u32..=8).prop_map(
            |(item, tag, count)| {
                let stack = ItemStack::new(ItemId::new(item), count, 8);
                match tag {
                    Some(tag) => stack.with_tag(Tag::new(tag)),
                    None => stack,
                }
            }
        ),
    ];
    proptest::collection::vec(stack, 0..=max_len)
}

/// Random permutation of `0..len`.
pub(crate) fn permutation(len: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((0..len).collect::<Vec<_>>()).prop_shuffle()
}

/// A layout together with a permutation over it.
pub(crate) fn layout_and_permutation(
    max_len: usize,
) -> impl Strategy<Value = (Vec<ItemStack>, Vec<usize>)> {
    layout(max_len).prop_flat_map(|stacks| {
        let len = stacks.len();
        (Just(stacks), permutation(len))
    })
}
