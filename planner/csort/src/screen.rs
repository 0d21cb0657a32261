//! A layout file presented as a container screen.

use csort_plan::{Scope, ScreenHelper};
use csort_stack::ItemStack;

use crate::layout::Layout;

/// A left click on a layout slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    pub slot: usize,
}

/// Screen over a layout's slots. Slot handles are layout indices.
pub struct LayoutScreen<'l> {
    layout: &'l Layout,
    slots: Vec<usize>,
}

impl<'l> LayoutScreen<'l> {
    pub fn new(layout: &'l Layout) -> Self {
        LayoutScreen {
            layout,
            slots: (0..layout.stacks.len()).collect(),
        }
    }
}

impl ScreenHelper for LayoutScreen<'_> {
    type Slot = usize;
    type Event = ClickEvent;

    fn menu_slots(&self) -> &[usize] {
        &self.slots
    }

    fn stack(&self, slot: usize) -> ItemStack {
        self.layout.stacks[slot]
    }

    // Layouts give each slot exactly one scope, so both views agree.
    fn scope(&self, slot: usize, _prefer_slots: bool) -> Scope {
        self.layout.scopes.get(slot).copied().unwrap_or(Scope::INVALID)
    }

    fn click_event(&self, slot: usize) -> ClickEvent {
        ClickEvent { slot }
    }
}
