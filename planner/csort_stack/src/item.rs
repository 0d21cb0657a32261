//! Interned item and tag handles.

/// Interned identity of an item kind.
///
/// Raw value `0` is reserved for [`ItemId::AIR`], the item of the empty
/// stack. Interners hand out IDs starting from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ItemId(u32);

impl ItemId {
    /// Item carried by [`ItemStack::EMPTY`](crate::ItemStack::EMPTY).
    pub const AIR: ItemId = ItemId(0);

    /// Create an item ID from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize` (for indexing into name tables).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Interned data tag attached to a stack.
///
/// Two tags are equal iff their interned handles are equal; structural
/// comparison of tag payloads happens once, at interning time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Tag(u32);

impl Tag {
    /// Create a tag from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize` (for indexing into name tables).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
