//! Slots plus cursor, and the pickup transition function.

use csort_stack::{ItemStack, StackMatcher};
use rustc_hash::FxHashMap;

/// Observable outcome of one pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupEffect {
    /// Cursor and slot both empty, or a same-kind merge onto a full slot.
    Nothing,
    /// The slot's stack moved onto the empty cursor.
    Take,
    /// The cursor's stack moved into the empty slot.
    Place,
    /// Same-kind merge; `moved` items went from cursor to slot.
    Merge { moved: u32 },
    /// Different kinds traded places.
    Swap,
}

/// A row of slots and the cursor that moves stacks between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<ItemStack>,
    cursor: ItemStack,
}

impl Inventory {
    /// Inventory with the given slot contents and an empty cursor.
    pub fn new(slots: Vec<ItemStack>) -> Self {
        Inventory {
            slots,
            cursor: ItemStack::EMPTY,
        }
    }

    pub fn slots(&self) -> &[ItemStack] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> ItemStack {
        self.slots[index]
    }

    pub fn cursor(&self) -> ItemStack {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Apply one pickup against `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn pickup(&mut self, index: usize) -> PickupEffect {
        let slot = self.slots[index];
        let cursor = self.cursor;

        let effect = match (cursor.is_empty(), slot.is_empty()) {
            (true, true) => PickupEffect::Nothing,
            (true, false) => {
                self.cursor = slot;
                self.slots[index] = ItemStack::EMPTY;
                PickupEffect::Take
            }
            (false, true) => {
                self.slots[index] = cursor;
                self.cursor = ItemStack::EMPTY;
                PickupEffect::Place
            }
            (false, false) if cursor.is_same_item_same_tag(&slot) => {
                let moved = cursor.count().min(slot.space());
                if moved == 0 {
                    PickupEffect::Nothing
                } else {
                    self.slots[index] = slot.with_count(slot.count() + moved);
                    self.cursor = cursor.with_count(cursor.count() - moved);
                    PickupEffect::Merge { moved }
                }
            }
            (false, false) => {
                self.slots[index] = cursor;
                self.cursor = slot;
                PickupEffect::Swap
            }
        };

        tracing::trace!(slot = index, ?effect, "pickup");
        effect
    }

    /// Apply a sequence of pickups in order.
    pub fn run(&mut self, pickups: impl IntoIterator<Item = usize>) {
        for index in pickups {
            self.pickup(index);
        }
    }

    /// Total item count per kind over all slots and the cursor.
    pub fn totals(&self) -> FxHashMap<StackMatcher, u64> {
        let mut totals = FxHashMap::default();
        for stack in self.slots.iter().chain(std::iter::once(&self.cursor)) {
            if !stack.is_empty() {
                *totals.entry(StackMatcher::of(stack)).or_insert(0) += u64::from(stack.count());
            }
        }
        totals
    }

    /// Number of non-empty stacks below their maximum.
    pub fn partial_stacks(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| !s.is_empty() && !s.is_full())
            .count()
    }
}
