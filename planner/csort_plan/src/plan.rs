//! The index-level output of the planning passes.

use smallvec::SmallVec;

use crate::screen::ScreenHelper;
use crate::sink::{InteractionSink, TriggerType};

/// One step of a plan, in slot indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanStep {
    /// A single pickup.
    Pickup(usize),
    /// Pickups handed to the sink together (`push_all`).
    Batch(SmallVec<[usize; 4]>),
    /// Ask the sink to send everything queued so far.
    Flush(TriggerType),
}

/// Ordered pickups and flushes for one sort invocation.
///
/// Step order is the emission order; [`Plan::emit`] never reorders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<PlanStep>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn pickup(&mut self, slot: usize) {
        tracing::trace!(slot, "pickup");
        self.steps.push(PlanStep::Pickup(slot));
    }

    pub fn batch(&mut self, slots: SmallVec<[usize; 4]>) {
        tracing::trace!(?slots, "pickup batch");
        self.steps.push(PlanStep::Batch(slots));
    }

    pub fn flush(&mut self, trigger: TriggerType) {
        self.steps.push(PlanStep::Flush(trigger));
    }

    /// Trade the cursor's stack with the stack in `target` when both are the
    /// same kind and `target` is full, using the empty `working` slot as
    /// scratch space.
    ///
    /// A plain pickup cannot do this: same-kind stacks merge, and merging
    /// onto a full stack moves nothing. Afterwards `target` holds the old
    /// cursor stack, the cursor holds the old `target` stack, and `working`
    /// is empty again.
    pub fn exchange(&mut self, working: usize, target: usize) {
        tracing::trace!(working, target, "five-pickup exchange");
        for slot in [working, target, working, target, working] {
            self.steps.push(PlanStep::Pickup(slot));
        }
    }

    /// Every pickup in order, with batches flattened.
    pub fn pickups(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps.iter().flat_map(|step| {
            let slots: &[usize] = match step {
                PlanStep::Pickup(slot) => std::slice::from_ref(slot),
                PlanStep::Batch(slots) => slots,
                PlanStep::Flush(_) => &[],
            };
            slots.iter().copied()
        })
    }

    pub fn pickup_count(&self) -> usize {
        self.pickups().count()
    }

    /// Hand the plan to `sink`, mapping slot indices to click events through
    /// `helper`. `slots[i]` is the host slot for index `i`.
    pub fn emit<H, S>(&self, helper: &H, slots: &[H::Slot], sink: &mut S)
    where
        H: ScreenHelper,
        S: InteractionSink<H::Event>,
    {
        for step in &self.steps {
            match step {
                PlanStep::Pickup(slot) => sink.push(helper.click_event(slots[*slot])),
                PlanStep::Batch(batch) => {
                    sink.push_all(batch.iter().map(|&slot| helper.click_event(slots[slot])));
                }
                PlanStep::Flush(trigger) => sink.trigger_send(*trigger),
            }
        }
    }
}
