// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Immutable subscription transition records.
//!
//! A [`TransitionRecord`] is one edge of a subscription's lifecycle: the plan,
//! phase, price list and state before and after a change, when it was
//! requested and when it takes effect. Records are built once by the
//! entitlement engine, posted on the bus and replayed in total order to
//! reconstruct subscription history.

mod classify;
mod ordering;
mod transition;

#[cfg(test)]
mod tests;

pub use classify::{classify_raw, derive_transition_type};
pub use ordering::{annotate_user_operation, sort_for_replay};
pub use transition::{TransitionIds, TransitionOrigin, TransitionRecord, TransitionSide};
