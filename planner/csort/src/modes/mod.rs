//! Reference sort modes.
//!
//! Every mode orders empty slots last and keeps equal stacks in slot order.

use std::cmp::Reverse;
use std::fmt;

use csort_plan::{SortContext, SortMode};
use csort_stack::{ItemStack, StackMatcher};
use rustc_hash::FxHashMap;

use crate::layout::ItemNames;

/// A sort mode as named in layout files and on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModeName {
    /// Keep the current order.
    None,
    /// By item name, then tag, larger stacks first.
    #[default]
    Item,
    /// Items with the largest total first, counting every tag together.
    Quantity,
}

impl ModeName {
    pub const ALL: [ModeName; 3] = [ModeName::None, ModeName::Item, ModeName::Quantity];

    pub fn parse(name: &str) -> Option<ModeName> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModeName::None => "none",
            ModeName::Item => "item",
            ModeName::Quantity => "quantity",
        }
    }
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the sort mode `name`, resolving item names through `names`.
pub fn sort_mode(name: ModeName, names: &ItemNames) -> Box<dyn SortMode + '_> {
    match name {
        ModeName::None => Box::new(Unsorted),
        ModeName::Item => Box::new(ByItem { names }),
        ModeName::Quantity => Box::new(ByQuantity { names }),
    }
}

struct Unsorted;

impl SortMode for Unsorted {
    fn sort(&self, ids: Vec<usize>, _: &[ItemStack], _: &SortContext) -> Vec<usize> {
        ids
    }
}

struct ByItem<'n> {
    names: &'n ItemNames,
}

impl SortMode for ByItem<'_> {
    fn sort(&self, mut ids: Vec<usize>, stacks: &[ItemStack], _: &SortContext) -> Vec<usize> {
        ids.sort_by_key(|&i| {
            let stack = &stacks[i];
            (stack.is_empty(), kind_key(self.names, stack), Reverse(stack.count()))
        });
        ids
    }
}

struct ByQuantity<'n> {
    names: &'n ItemNames,
}

impl SortMode for ByQuantity<'_> {
    fn sort(&self, mut ids: Vec<usize>, stacks: &[ItemStack], _: &SortContext) -> Vec<usize> {
        let mut totals: FxHashMap<StackMatcher, u64> = FxHashMap::default();
        for stack in stacks.iter().filter(|s| !s.is_empty()) {
            *totals.entry(StackMatcher::ignore_tag(stack)).or_default() +=
                u64::from(stack.count());
        }

        ids.sort_by_key(|&i| {
            let stack = &stacks[i];
            let total = totals
                .get(&StackMatcher::ignore_tag(stack))
                .copied()
                .unwrap_or(0);
            (
                stack.is_empty(),
                Reverse(total),
                kind_key(self.names, stack),
                Reverse(stack.count()),
            )
        });
        ids
    }
}

fn kind_key<'n>(names: &'n ItemNames, stack: &ItemStack) -> (&'n str, Option<&'n str>) {
    (
        names.item_name(stack.item()),
        stack.tag().map(|tag| names.tag_name(tag)),
    )
}
