use csort_plan::Scope;
use csort_stack::ItemStack;
use pretty_assertions::assert_eq;

use crate::modes::ModeName;

use super::{Layout, LayoutError};

#[test]
fn parses_slots_scopes_and_tags() {
    let layout = Layout::parse(
        r#"
        origin = 1
        mode = "quantity"

        [[slots]]
        item = "stone"
        count = 12

        [[slots]]

        [[slots]]
        item = "sword"
        count = 1
        max = 1
        tag = "Sharpness V"
        scope = 2

        [[slots]]
        item = "stone"
        count = 3
        locked = true
        "#,
    )
    .unwrap_or_else(|e| panic!("layout should parse: {e}"));

    assert_eq!(layout.origin, 1);
    assert_eq!(layout.mode, ModeName::Quantity);
    assert_eq!(
        layout.scopes,
        vec![Scope::new(0), Scope::new(0), Scope::new(2), Scope::INVALID]
    );

    let names = &layout.names;
    let described: Vec<String> = layout.stacks.iter().map(|s| names.describe(s)).collect();
    assert_eq!(
        described,
        vec!["stone x12", "empty", "sword x1 {Sharpness V}", "stone x3"]
    );
    assert!(layout.stacks[0].is_same_item_same_tag(&layout.stacks[3]));
    assert_eq!(layout.stacks[0].max_count(), 64);
}

#[test]
fn defaults_to_item_mode() {
    let layout = Layout::parse("").unwrap_or_else(|e| panic!("empty layout should parse: {e}"));
    assert_eq!(layout.mode, ModeName::Item);
    assert!(layout.stacks.is_empty());
}

#[test]
fn zero_count_is_empty() {
    let layout = Layout::parse("[[slots]]\nitem = \"stone\"\ncount = 0\n")
        .unwrap_or_else(|e| panic!("layout should parse: {e}"));
    assert_eq!(layout.stacks, vec![ItemStack::EMPTY]);
}

#[test]
fn rejects_overfull_slot() {
    let err = Layout::parse("[[slots]]\nitem = \"egg\"\ncount = 20\nmax = 16\n");
    assert!(matches!(err, Err(LayoutError::InvalidSlot { index: 0, .. })));
}

#[test]
fn rejects_conflicting_max_for_one_item() {
    let err = Layout::parse(
        r#"
        [[slots]]
        item = "stone"
        count = 5

        [[slots]]
        item = "stone"
        count = 16
        max = 16
        "#,
    );
    let Err(LayoutError::InvalidSlot { index, reason }) = err else {
        panic!("expected an invalid slot error");
    };
    assert_eq!(index, 1);
    assert_eq!(
        reason,
        "'stone' has a max stack size of 16 here but 64 in an earlier slot"
    );
}

#[test]
fn max_is_shared_across_tags() {
    let err = Layout::parse(
        r#"
        [[slots]]
        item = "sword"
        count = 1
        max = 1
        tag = "Sharpness V"

        [[slots]]
        item = "sword"
        count = 1
        "#,
    );
    assert!(matches!(err, Err(LayoutError::InvalidSlot { index: 1, .. })));
}

#[test]
fn repeated_max_and_empty_slots_are_accepted() {
    let layout = Layout::parse(
        r#"
        [[slots]]
        item = "egg"
        count = 3
        max = 16

        [[slots]]
        item = "egg"
        count = 0
        max = 64

        [[slots]]
        item = "egg"
        count = 16
        max = 16
        "#,
    )
    .unwrap_or_else(|e| panic!("layout should parse: {e}"));
    assert_eq!(layout.stacks[2].max_count(), 16);
    assert!(layout.stacks[1].is_empty());
}

#[test]
fn rejects_count_without_item() {
    let err = Layout::parse("[[slots]]\n[[slots]]\ncount = 4\n");
    let Err(LayoutError::InvalidSlot { index, reason }) = err else {
        panic!("expected an invalid slot error");
    };
    assert_eq!(index, 1);
    assert_eq!(reason, "count 4 without an item");
}

#[test]
fn rejects_unknown_mode() {
    let err = Layout::parse("mode = \"rainbow\"\n");
    assert!(matches!(err, Err(LayoutError::UnknownMode(name)) if name == "rainbow"));
}

#[test]
fn rejects_origin_out_of_range() {
    let err = Layout::parse("origin = 3\n[[slots]]\n");
    assert!(matches!(
        err,
        Err(LayoutError::InvalidOrigin { origin: 3, slots: 1 })
    ));
}

#[test]
fn rejects_unknown_keys() {
    let err = Layout::parse("[[slots]]\nitme = \"stone\"\n");
    assert!(matches!(err, Err(LayoutError::Parse { .. })));
}

#[test]
fn interning_is_stable() {
    let mut names = super::ItemNames::new();
    let stone = names.intern_item("stone");
    let dirt = names.intern_item("dirt");
    assert_eq!(names.intern_item("stone"), stone);
    assert_ne!(stone, dirt);
    assert_ne!(stone, csort_stack::ItemId::AIR);
    assert_eq!(names.item_name(csort_stack::ItemId::AIR), "air");
    assert_eq!(names.item_name(dirt), "dirt");
}
