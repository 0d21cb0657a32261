//! Per-slot progress flags for the permutation engine.

use bitflags::bitflags;
use csort_stack::ItemStack;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub(super) struct SlotState: u8 {
        /// The slot holds its final content and is never clicked again.
        const DONE = 1;
        /// The slot is physically empty right now.
        const EMPTY = 1 << 1;
    }
}

/// [`SlotState`] for every slot of one invocation.
pub(super) struct SlotStates(Vec<SlotState>);

impl SlotStates {
    /// Fixed points of `sorted_ids` start done; every other slot starts
    /// empty iff its stack is empty.
    pub(super) fn new(stacks: &[ItemStack], sorted_ids: &[usize]) -> Self {
        let states = stacks
            .iter()
            .zip(sorted_ids)
            .enumerate()
            .map(|(slot, (stack, &origin))| {
                if slot == origin {
                    SlotState::DONE
                } else if stack.is_empty() {
                    SlotState::EMPTY
                } else {
                    SlotState::empty()
                }
            })
            .collect();
        SlotStates(states)
    }

    #[inline]
    pub(super) fn is_done(&self, slot: usize) -> bool {
        self.0[slot].contains(SlotState::DONE)
    }

    #[inline]
    pub(super) fn is_empty(&self, slot: usize) -> bool {
        self.0[slot].contains(SlotState::EMPTY)
    }

    #[inline]
    pub(super) fn mark_done(&mut self, slot: usize) {
        self.0[slot].insert(SlotState::DONE);
    }

    #[inline]
    pub(super) fn mark_empty(&mut self, slot: usize) {
        self.0[slot].insert(SlotState::EMPTY);
    }

    pub(super) fn done_count(&self) -> usize {
        self.0.iter().filter(|s| s.contains(SlotState::DONE)).count()
    }
}
