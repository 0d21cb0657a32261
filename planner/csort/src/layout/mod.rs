//! Layout files: a container's slots and what is in them, as TOML.
//!
//! ```toml
//! origin = 0
//! mode = "item"
//!
//! [[slots]]
//! item = "stone"
//! count = 12
//! max = 64
//! tag = "display:Red"
//! scope = 0
//! ```
//!
//! A slot without `item` (or with `count = 0`) is empty. `locked = true` puts
//! a slot outside every sortable scope.

use std::path::{Path, PathBuf};

use csort_plan::Scope;
use csort_stack::{ItemId, ItemStack, Tag, DEFAULT_MAX_COUNT};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::modes::ModeName;

/// Error loading a layout file.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("'{}' is not a valid layout: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("slot {index}: {reason}")]
    InvalidSlot { index: usize, reason: String },
    #[error("origin slot {origin} is outside the {slots} slots of the layout")]
    InvalidOrigin { origin: usize, slots: usize },
    #[error("unknown sort mode '{0}' (expected none, item or quantity)")]
    UnknownMode(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutFile {
    #[serde(default)]
    origin: usize,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    slots: Vec<SlotEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SlotEntry {
    item: Option<String>,
    #[serde(default)]
    count: u32,
    max: Option<u32>,
    tag: Option<String>,
    #[serde(default)]
    scope: i32,
    #[serde(default)]
    locked: bool,
}

/// Interned item and tag names.
///
/// Item ID 0 is reserved for the empty stack and renders as `air`.
#[derive(Debug, Clone)]
pub struct ItemNames {
    items: Vec<String>,
    item_ids: FxHashMap<String, ItemId>,
    tags: Vec<String>,
    tag_ids: FxHashMap<String, Tag>,
}

impl Default for ItemNames {
    fn default() -> Self {
        ItemNames {
            items: vec!["air".to_string()],
            item_ids: FxHashMap::default(),
            tags: Vec::new(),
            tag_ids: FxHashMap::default(),
        }
    }
}

impl ItemNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern_item(&mut self, name: &str) -> ItemId {
        if let Some(&id) = self.item_ids.get(name) {
            return id;
        }
        let id = ItemId::new(index_to_raw(self.items.len()));
        self.items.push(name.to_string());
        self.item_ids.insert(name.to_string(), id);
        id
    }

    pub fn intern_tag(&mut self, name: &str) -> Tag {
        if let Some(&tag) = self.tag_ids.get(name) {
            return tag;
        }
        let tag = Tag::new(index_to_raw(self.tags.len()));
        self.tags.push(name.to_string());
        self.tag_ids.insert(name.to_string(), tag);
        tag
    }

    pub fn item_name(&self, item: ItemId) -> &str {
        &self.items[item.index()]
    }

    pub fn tag_name(&self, tag: Tag) -> &str {
        &self.tags[tag.index()]
    }

    /// `stone x12`, `stone x12 {display:Red}`, or `empty`.
    pub fn describe(&self, stack: &ItemStack) -> String {
        if stack.is_empty() {
            return "empty".to_string();
        }
        let name = self.item_name(stack.item());
        match stack.tag() {
            Some(tag) => format!("{name} x{} {{{}}}", stack.count(), self.tag_name(tag)),
            None => format!("{name} x{}", stack.count()),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "name tables are bounded by slot counts, far below u32::MAX"
)]
fn index_to_raw(index: usize) -> u32 {
    index as u32
}

/// A validated layout.
#[derive(Debug, Clone)]
pub struct Layout {
    pub names: ItemNames,
    pub stacks: Vec<ItemStack>,
    pub scopes: Vec<Scope>,
    pub origin: usize,
    pub mode: ModeName,
}

impl Layout {
    /// Read and validate a layout file.
    pub fn load(path: &Path) -> Result<Layout, LayoutError> {
        let text = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: LayoutFile = toml::from_str(&text).map_err(|source| LayoutError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let layout = Self::from_file(file)?;
        tracing::debug!(path = %path.display(), slots = layout.stacks.len(), "loaded layout");
        Ok(layout)
    }

    /// Parse and validate layout text.
    pub fn parse(text: &str) -> Result<Layout, LayoutError> {
        let file: LayoutFile = toml::from_str(text).map_err(|source| LayoutError::Parse {
            path: PathBuf::from("<input>"),
            source,
        })?;
        Self::from_file(file)
    }

    fn from_file(file: LayoutFile) -> Result<Layout, LayoutError> {
        let mode = match file.mode.as_deref() {
            None => ModeName::default(),
            Some(name) => {
                ModeName::parse(name).ok_or_else(|| LayoutError::UnknownMode(name.to_string()))?
            }
        };

        let mut names = ItemNames::new();
        let mut stacks = Vec::with_capacity(file.slots.len());
        let mut scopes = Vec::with_capacity(file.slots.len());
        // Max stack size belongs to the item, whatever slot or tag it is in.
        let mut max_counts: FxHashMap<ItemId, u32> = FxHashMap::default();

        for (index, entry) in file.slots.into_iter().enumerate() {
            let stack = entry_stack(index, &entry, &mut names)?;
            if !stack.is_empty() {
                let first = *max_counts
                    .entry(stack.item())
                    .or_insert(stack.max_count());
                if first != stack.max_count() {
                    return Err(LayoutError::InvalidSlot {
                        index,
                        reason: format!(
                            "'{}' has a max stack size of {} here but {first} in an earlier slot",
                            names.item_name(stack.item()),
                            stack.max_count()
                        ),
                    });
                }
            }
            stacks.push(stack);
            scopes.push(if entry.locked {
                Scope::INVALID
            } else {
                Scope::new(entry.scope)
            });
        }

        if !stacks.is_empty() && file.origin >= stacks.len() {
            return Err(LayoutError::InvalidOrigin {
                origin: file.origin,
                slots: stacks.len(),
            });
        }

        Ok(Layout {
            names,
            stacks,
            scopes,
            origin: file.origin,
            mode,
        })
    }
}

fn entry_stack(
    index: usize,
    entry: &SlotEntry,
    names: &mut ItemNames,
) -> Result<ItemStack, LayoutError> {
    let invalid = |reason: String| LayoutError::InvalidSlot { index, reason };

    let Some(item) = entry.item.as_deref() else {
        if entry.count > 0 {
            return Err(invalid(format!("count {} without an item", entry.count)));
        }
        return Ok(ItemStack::EMPTY);
    };
    if entry.count == 0 {
        return Ok(ItemStack::EMPTY);
    }

    let max = entry.max.unwrap_or(DEFAULT_MAX_COUNT);
    if max == 0 {
        return Err(invalid(format!("'{item}' has a max stack size of 0")));
    }
    if entry.count > max {
        return Err(invalid(format!(
            "count {} exceeds the max stack size of {max}",
            entry.count
        )));
    }

    let stack = ItemStack::new(names.intern_item(item), entry.count, max);
    Ok(match entry.tag.as_deref() {
        Some(tag) => stack.with_tag(names.intern_tag(tag)),
        None => stack,
    })
}

#[cfg(test)]
mod tests;
