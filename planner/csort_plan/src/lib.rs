//! Pickup planning for the ClientSort planner.
//!
//! Given a row of slots and a target order, this crate works out which slots
//! to click, and in which order, so that the only primitive available (pick
//! up a slot into the cursor) rearranges the row into that order.
//!
//! # Pipeline
//!
//! ```text
//! ScreenHelper ──► Sorter::new ──► (slots, stacks snapshot)
//!                                      │
//!                                      ▼
//!                     combine_stacks ──► Plan (batches + GuiConfirm flushes)
//!                                      │
//!                                      ▼
//!                     SortMode::sort ──► permutation P
//!                                      │
//!                                      ▼
//!                  apply_permutation ──► Plan (pickups)
//!                                      │
//!                                      ▼
//!                       Plan::emit ──► InteractionSink
//! ```
//!
//! Both passes write slot *indices* into a [`Plan`]. Only [`Plan::emit`]
//! turns indices into the host's click events, so the passes are testable
//! against the simulator in `csort_exchange` without any host types.
//!
//! # Preconditions
//!
//! Plans are only correct if the host behaves like the simulator and nobody
//! else touches the slots while a plan is in flight. Malformed input (a
//! permutation that is not a bijection, an overfull stack) panics.

pub mod combine;
mod mode;
pub mod permute;
mod plan;
mod screen;
pub mod sink;
mod sorter;

pub use combine::combine_stacks;
pub use mode::{SortContext, SortMode};
pub use permute::apply_permutation;
pub use plan::{Plan, PlanStep};
pub use screen::{Scope, ScreenHelper};
pub use sink::{Batch, Emitted, InteractionQueue, InteractionSink, RecordingSink, TriggerType};
pub use sorter::Sorter;

#[cfg(test)]
mod test_helpers;
