//! Permutation execution: turn a target order into cursor pickups.
//!
//! `sorted_ids[target] = origin` says the stack now in `origin` must end up
//! in `target`. The only tool is the cursor, so every move is a chain: pick
//! up an origin, click the slot its stack belongs in (which hands back that
//! slot's stack), click where *that* stack belongs, and so on until the
//! cursor drops its load into an empty slot.
//!
//! # Algorithm
//!
//! Invert `sorted_ids` into `origin_to_target`, then visit targets in order.
//! For each target not yet done:
//!
//! 1. **Start.** If the origin is non-empty, pick it up. The origin is now
//!    empty and becomes the chain's *working slot*.
//! 2. **Follow.** At each chain slot `id`, compare the cursor's stack with
//!    the stack `id` held before planning:
//!    - same kind and count: `id` already holds an equivalent stack, so mark
//!      it done without clicking and move on;
//!    - same kind, cursor smaller: a pickup would only top up `id`, so trade
//!      through the working slot with the five-pickup exchange;
//!    - otherwise: one pickup swaps (or, for a full cursor onto a partial
//!      stack of its kind, merges into an equivalent swap).
//!
//!    A pickup onto an empty slot drops the cursor's load and ends the chain.
//! 3. **Empty origin.** Nothing to carry. If the target is empty too it is
//!    already correct. Otherwise the target's own stack still has to leave,
//!    so the chain starts by picking up the target instead, and ends at the
//!    (empty) origin.
//!
//! Comparisons always read the pre-plan snapshot. A slot's live contents only
//! differ from the snapshot once it is done or marked empty, and the chain
//! never compares against such slots.
//!
//! # Precondition
//!
//! Per kind, at most one stack is below its maximum. The consolidation pass
//! establishes this. Without it, the five-pickup exchange and the merge-swap
//! do not trade stacks, they merge them.

mod state;

use csort_stack::ItemStack;

use crate::plan::Plan;
use state::SlotStates;

/// Plan the pickups that rearrange `stacks` so that slot `i` ends up with
/// the stack now in `sorted_ids[i]`, appending them to `plan`.
///
/// Rows of zero or one slot need nothing.
///
/// # Panics
///
/// Panics if `sorted_ids` is not a permutation of `0..stacks.len()`.
pub fn apply_permutation(stacks: &[ItemStack], sorted_ids: &[usize], plan: &mut Plan) {
    let slot_count = stacks.len();
    assert_eq!(
        sorted_ids.len(),
        slot_count,
        "permutation covers {} slots, row has {slot_count}",
        sorted_ids.len()
    );
    if slot_count <= 1 {
        return;
    }

    let origin_to_target = invert(sorted_ids);
    let mut engine = Engine {
        stacks,
        origin_to_target: &origin_to_target,
        states: SlotStates::new(stacks, sorted_ids),
        plan,
    };
    let already_done = engine.states.done_count();

    for target in 0..slot_count {
        if engine.states.is_done(target) {
            continue;
        }

        let origin = sorted_ids[target];
        if engine.states.is_empty(origin) {
            if engine.states.is_empty(target) {
                engine.states.mark_done(target);
                continue;
            }
            tracing::trace!(target, origin, "evacuating slot with empty origin");
            engine.plan.pickup(target);
            engine.states.mark_empty(target);
            engine.states.mark_done(target);
            engine.follow_chain(stacks[target], target, origin_to_target[target]);
            continue;
        }

        engine.plan.pickup(origin);
        engine.states.mark_empty(origin);
        engine.follow_chain(stacks[origin], origin, target);
    }

    tracing::debug!(slots = slot_count, already_done, "applied permutation");
}

/// Mutable state of one [`apply_permutation`] run.
struct Engine<'a> {
    /// Pre-plan contents. Never updated.
    stacks: &'a [ItemStack],
    origin_to_target: &'a [usize],
    states: SlotStates,
    plan: &'a mut Plan,
}

impl Engine<'_> {
    /// Carry `carried` (now on the cursor) along the chain starting at
    /// `start`, until it lands in an empty slot or reaches a finished slot.
    ///
    /// `working` is an empty slot available as scratch space for the
    /// five-pickup exchange.
    fn follow_chain(&mut self, carried: ItemStack, working: usize, start: usize) {
        let mut current = carried;
        let mut id = start;

        while !self.states.is_done(id) {
            let resident = self.stacks[id];

            if resident.is_same_item(&current)
                && !self.states.is_empty(id)
                && resident.is_same_item_same_tag(&current)
            {
                if resident.count() == current.count() {
                    tracing::trace!(slot = id, "equivalent stack already in place");
                    self.states.mark_done(id);
                    id = self.origin_to_target[id];
                    continue;
                }
                if current.count() < resident.count() {
                    self.plan.exchange(working, id);
                    current = resident;
                    self.states.mark_done(id);
                    id = self.origin_to_target[id];
                    continue;
                }
            }

            self.plan.pickup(id);
            self.states.mark_done(id);
            if self.states.is_empty(id) {
                // The cursor's load landed in an empty slot; nothing downstream
                // was displaced.
                break;
            }
            current = resident;
            id = self.origin_to_target[id];
        }
    }
}

/// `inverse[sorted_ids[i]] = i`.
///
/// # Panics
///
/// Panics if `sorted_ids` is not a bijection over `0..len`.
fn invert(sorted_ids: &[usize]) -> Vec<usize> {
    let len = sorted_ids.len();
    let mut inverse = vec![usize::MAX; len];
    for (target, &origin) in sorted_ids.iter().enumerate() {
        assert!(
            origin < len,
            "permutation maps slot {target} to {origin}, outside 0..{len}"
        );
        assert!(
            inverse[origin] == usize::MAX,
            "permutation uses origin slot {origin} twice"
        );
        inverse[origin] = target;
    }
    inverse
}
