//! The [`ItemStack`] value type.

use crate::item::{ItemId, Tag};

/// A quantity of one item kind held by a single slot (or the cursor).
///
/// Invariant: `count <= max_count`. A stack with `count == 0` is always
/// normalized to [`ItemStack::EMPTY`], so two empty stacks compare equal
/// regardless of what they held before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemStack {
    item: ItemId,
    tag: Option<Tag>,
    count: u32,
    max_count: u32,
}

impl ItemStack {
    /// The canonical empty stack.
    pub const EMPTY: ItemStack = ItemStack {
        item: ItemId::AIR,
        tag: None,
        count: 0,
        max_count: 0,
    };

    /// Create an untagged stack.
    ///
    /// A zero `count` yields [`ItemStack::EMPTY`].
    ///
    /// # Panics
    ///
    /// Panics if `count > max_count`. Overfull stacks are a caller bug.
    pub fn new(item: ItemId, count: u32, max_count: u32) -> Self {
        assert!(
            count <= max_count,
            "stack of {item:?} holds {count} items, above its max of {max_count}"
        );
        if count == 0 {
            return Self::EMPTY;
        }
        ItemStack {
            item,
            tag: None,
            count,
            max_count,
        }
    }

    /// Attach a data tag. No effect on the empty stack.
    #[must_use]
    pub fn with_tag(self, tag: Tag) -> Self {
        if self.is_empty() {
            return self;
        }
        ItemStack {
            tag: Some(tag),
            ..self
        }
    }

    /// The same stack with a different count, normalizing zero to empty.
    #[must_use]
    pub fn with_count(self, count: u32) -> Self {
        let mut stack = self;
        stack.set_count(count);
        stack
    }

    /// Overwrite the count in place. Setting zero empties the stack.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty and `count > 0` (an empty stack has no
    /// item to count), or if `count` exceeds the max.
    pub fn set_count(&mut self, count: u32) {
        if count == 0 {
            *self = Self::EMPTY;
            return;
        }
        assert!(!self.is_empty(), "cannot set a count on the empty stack");
        assert!(
            count <= self.max_count,
            "stack of {:?} cannot hold {count} items (max {})",
            self.item,
            self.max_count
        );
        self.count = count;
    }

    #[inline]
    pub fn item(&self) -> ItemId {
        self.item
    }

    #[inline]
    pub fn tag(&self) -> Option<Tag> {
        self.tag
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// A non-empty stack at its maximum. The empty stack is never full.
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.is_empty() && self.count >= self.max_count
    }

    /// How many more items of this kind fit on the stack.
    #[inline]
    pub fn space(&self) -> u32 {
        self.max_count - self.count
    }

    /// Tag-insensitive kind comparison.
    pub fn is_same_item(&self, other: &ItemStack) -> bool {
        self.item == other.item
    }

    /// Tag-sensitive kind comparison. This is the predicate that decides
    /// whether two stacks merge.
    ///
    /// The empty stack matches nothing but another empty stack.
    pub fn is_same_item_same_tag(&self, other: &ItemStack) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.item == other.item && self.tag == other.tag
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::EMPTY
    }
}
