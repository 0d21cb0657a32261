//! Item stack model for the ClientSort planner.
//!
//! Every planner crate reasons about slot contents through the types here:
//!
//! - **Identity** ([`ItemId`], [`Tag`]): interned handles for an item kind and
//!   its optional data tag. Interning is the caller's job; the planner only
//!   compares handles.
//!
//! - **Stacks** ([`ItemStack`]): a quantity of one item kind bounded by a
//!   per-stack maximum. A count of zero is the canonical empty stack.
//!
//! - **Matchers** ([`StackMatcher`]): a hashable key for a stack's kind,
//!   either tag-sensitive or tag-insensitive.
//!
//! # Same-kind comparisons
//!
//! Two stacks are the same *kind* when their items and tags both match
//! ([`ItemStack::is_same_item_same_tag`]). The tag-insensitive comparison
//! ([`ItemStack::is_same_item`]) exists for cheap pre-checks; merges are only
//! ever decided by the tag-sensitive one.

mod item;
mod matcher;
mod stack;

pub use item::{ItemId, Tag};
pub use matcher::StackMatcher;
pub use stack::ItemStack;

/// Maximum stack size used when a layout does not specify one.
pub const DEFAULT_MAX_COUNT: u32 = 64;
