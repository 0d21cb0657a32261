//! The ordering-policy seam.

use csort_stack::ItemStack;

use crate::screen::Scope;

/// What a [`SortMode`] knows about the row it orders besides the stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortContext {
    scope: Scope,
    slot_count: usize,
}

impl SortContext {
    pub fn new(scope: Scope, slot_count: usize) -> Self {
        SortContext { scope, slot_count }
    }

    /// Scope of the row being sorted.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }
}

/// Decides the target order of a row.
///
/// `sort` receives `ids = [0, 1, .., n-1]` and the (consolidated) stacks and
/// returns `sorted_ids`, where `sorted_ids[target]` is the slot whose stack
/// should end up at `target`. The result must be a permutation of `ids`.
pub trait SortMode {
    fn sort(&self, ids: Vec<usize>, stacks: &[ItemStack], context: &SortContext) -> Vec<usize>;
}

impl<F> SortMode for F
where
    F: Fn(Vec<usize>, &[ItemStack], &SortContext) -> Vec<usize>,
{
    fn sort(&self, ids: Vec<usize>, stacks: &[ItemStack], context: &SortContext) -> Vec<usize> {
        self(ids, stacks, context)
    }
}
