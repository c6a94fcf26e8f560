//! `pev-nav` — turns a live vehicle position feed into driving instructions
//! and connectivity diagnostics.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`feed`]        | `PositionFeed` trait, `FixedPositionFeed` in-memory feed      |
//! | [`instruction`] | `Instruction` / `Connectivity` diagnostic value types         |
//! | [`engine`]      | `NavigationEngine`                                            |
//!
//! # Design notes
//!
//! Navigation outcomes are **data, not errors**: a lost feed connection is an
//! expected operating condition for a vehicle on the street, so it surfaces
//! as [`Instruction::ConnectionLost`] rather than a `Result::Err`.  The
//! engine holds no state of its own — every operation is a pure function of
//! one fresh [`feed::PositionFeed`] sample, so repeated calls against an
//! unchanged feed return identical results.

pub mod engine;
pub mod feed;
pub mod instruction;

#[cfg(test)]
mod tests;

pub use engine::NavigationEngine;
pub use feed::{FixedPositionFeed, PositionFeed};
pub use instruction::{Connectivity, Instruction};
