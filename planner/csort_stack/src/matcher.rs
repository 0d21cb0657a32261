//! Hashable stack-kind keys.

use crate::item::{ItemId, Tag};
use crate::stack::ItemStack;

/// Key identifying a stack's kind, usable in hash maps.
///
/// Built tag-sensitive with [`StackMatcher::of`] or tag-insensitive with
/// [`StackMatcher::ignore_tag`]. Two matchers are equal iff item and tag
/// are equal, so an `ignore_tag` matcher never equals a tagged `of` matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StackMatcher {
    item: ItemId,
    tag: Option<Tag>,
}

impl StackMatcher {
    /// Matcher for the stack's item and tag.
    pub fn of(stack: &ItemStack) -> Self {
        StackMatcher {
            item: stack.item(),
            tag: stack.tag(),
        }
    }

    /// Matcher for the stack's item only.
    pub fn ignore_tag(stack: &ItemStack) -> Self {
        StackMatcher {
            item: stack.item(),
            tag: None,
        }
    }

    #[inline]
    pub fn item(&self) -> ItemId {
        self.item
    }

    #[inline]
    pub fn tag(&self) -> Option<Tag> {
        self.tag
    }
}
