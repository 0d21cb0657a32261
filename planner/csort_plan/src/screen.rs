//! The host capability the planner is injected with.

use csort_stack::ItemStack;

/// Region of a container screen that sorts as one unit (a chest body, the
/// player's main inventory, the hotbar).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Scope(i32);

impl Scope {
    /// Slots that never sort (crafting outputs, armor).
    pub const INVALID: Scope = Scope(i32::MIN);

    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// What the planner needs from the host screen.
///
/// The planner is generic over this trait only; it never sees host slot or
/// event types beyond passing them through.
pub trait ScreenHelper {
    /// Host handle for one slot.
    type Slot: Copy;
    /// Host representation of one pickup click, as accepted by the sink.
    type Event;

    /// Every slot of the open menu, in menu order.
    fn menu_slots(&self) -> &[Self::Slot];

    /// Live contents of `slot`.
    fn stack(&self, slot: Self::Slot) -> ItemStack;

    /// Scope of `slot`.
    ///
    /// With `prefer_slots` the slot's own region is returned; without it,
    /// the region the user means to sort when clicking that slot, which may
    /// be wider (a hotbar slot can stand for the whole player inventory).
    fn scope(&self, slot: Self::Slot, prefer_slots: bool) -> Scope;

    /// Build the left-click pickup event for `slot`.
    fn click_event(&self, slot: Self::Slot) -> Self::Event;
}
