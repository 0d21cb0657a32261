use csort_stack::{ItemStack, Tag};
use pretty_assertions::assert_eq;
use smallvec::smallvec;

use crate::plan::{Plan, PlanStep};
use crate::sink::TriggerType;
use crate::test_helpers::{a, b, simulate, EMPTY};

use super::combine_stacks;

fn combined(stacks: &[ItemStack]) -> (Vec<ItemStack>, Plan) {
    let mut after = stacks.to_vec();
    let mut plan = Plan::new();
    combine_stacks(&mut after, &mut plan);
    (after, plan)
}

/// `[A:1, A:1, empty]` → one batch of two pickups and a confirm.
#[test]
fn merges_trailing_partial_into_first() {
    let before = [a(1), a(1), EMPTY];
    let (after, plan) = combined(&before);

    assert_eq!(after, vec![a(2), EMPTY, EMPTY]);
    assert_eq!(
        plan.steps(),
        &[
            PlanStep::Batch(smallvec![1, 0]),
            PlanStep::Flush(TriggerType::GuiConfirm),
        ]
    );
    assert_eq!(simulate(&before, &plan).slots(), after.as_slice());
}

#[test]
fn remainder_is_put_back() {
    let before = [a(60), a(10)];
    let (after, plan) = combined(&before);

    assert_eq!(after, vec![a(64), a(6)]);
    assert_eq!(
        plan.steps(),
        &[
            PlanStep::Batch(smallvec![1, 0]),
            PlanStep::Flush(TriggerType::GuiConfirm),
            PlanStep::Pickup(1),
        ]
    );

    let inv = simulate(&before, &plan);
    assert_eq!(inv.slots(), after.as_slice());
    assert_eq!(inv.cursor(), EMPTY);
}

#[test]
fn spreads_over_several_targets() {
    let before = [a(60), b(5), a(62), a(10)];
    let (after, plan) = combined(&before);

    // Slot 3 fills slot 0 (+4) and slot 2 (+2), keeping 4.
    assert_eq!(after, vec![a(64), b(5), a(64), a(4)]);
    assert_eq!(plan.steps()[0], PlanStep::Batch(smallvec![3, 0, 2]));
    assert_eq!(simulate(&before, &plan).slots(), after.as_slice());
}

#[test]
fn stops_scanning_once_absorbed() {
    let before = [a(10), a(10), a(5)];
    let (after, plan) = combined(&before);

    assert_eq!(after, vec![a(25), EMPTY, EMPTY]);
    // Slot 2 goes entirely into slot 0; slot 1 then merges into slot 0 too.
    assert_eq!(
        plan.steps(),
        &[
            PlanStep::Batch(smallvec![2, 0]),
            PlanStep::Flush(TriggerType::GuiConfirm),
            PlanStep::Batch(smallvec![1, 0]),
            PlanStep::Flush(TriggerType::GuiConfirm),
        ]
    );
}

#[test]
fn lone_partials_emit_nothing() {
    let before = [a(3), b(3), EMPTY, a(64)];
    let (after, plan) = combined(&before);
    assert_eq!(after, before.to_vec());
    assert!(plan.is_empty());
}

#[test]
fn different_tags_do_not_merge() {
    let red = a(3).with_tag(Tag::new(1));
    let before = [a(3), red];
    let (after, plan) = combined(&before);
    assert_eq!(after, before.to_vec());
    assert!(plan.is_empty());
}

#[test]
fn full_stacks_are_never_targets() {
    let before = [a(64), a(2), a(1)];
    let (after, _) = combined(&before);
    assert_eq!(after, vec![a(64), a(3), EMPTY]);
}

mod proptest_combine {
    use proptest::prelude::*;

    use crate::test_helpers::{layout, simulate};

    use super::combined;

    proptest! {
        #[test]
        fn replay_matches_snapshot_and_conserves(before in layout(12)) {
            let (after, plan) = combined(&before);
            let inv = simulate(&before, &plan);
            prop_assert_eq!(inv.slots(), after.as_slice());
            prop_assert!(inv.cursor().is_empty());
            prop_assert_eq!(inv.totals(), csort_exchange::Inventory::new(before.clone()).totals());
        }

        #[test]
        fn never_adds_partial_stacks(before in layout(12)) {
            let (after, plan) = combined(&before);
            let partials = |s: &[csort_stack::ItemStack]| {
                s.iter().filter(|st| !st.is_empty() && !st.is_full()).count()
            };
            prop_assert!(partials(&after) <= partials(&before));
            let n = before.len();
            prop_assert!(plan.pickup_count() <= n * n);
        }

        #[test]
        fn leaves_at_most_one_partial_per_kind(before in layout(12)) {
            let (after, _) = combined(&before);
            let mut seen = Vec::new();
            for stack in after.iter().filter(|s| !s.is_empty() && !s.is_full()) {
                let kind = csort_stack::StackMatcher::of(stack);
                prop_assert!(!seen.contains(&kind), "two partial stacks of {:?}", kind);
                seen.push(kind);
            }
        }
    }
}
