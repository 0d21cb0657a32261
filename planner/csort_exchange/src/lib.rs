//! Cursor pickup simulator.
//!
//! The planner never observes the outcome of the operations it emits. It
//! predicts them. This crate is that prediction, written out as an
//! executable state machine over one cursor (the *register*) and a row of
//! slots, so plans can be replayed and checked.
//!
//! # The pickup primitive
//!
//! `pickup(slot)` with cursor `R` and slot `S`:
//!
//! | R | S | effect |
//! |---|---|---|
//! | empty | empty | nothing |
//! | empty | stack | take: `R := S`, `S := empty` |
//! | stack | empty | place: `S := R`, `R := empty` |
//! | kind K | kind K | merge `min(R, S.space)` into `S`; nothing if `S` is full |
//! | kind K | other kind | swap |
//!
//! Same-kind stacks never swap. Picking up with three items onto a slot of
//! the same kind holding sixty-four leaves both untouched, which is why the
//! permutation engine needs its five-pickup exchange for that case.

mod inventory;

pub use inventory::{Inventory, PickupEffect};
