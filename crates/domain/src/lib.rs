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

mod catalog;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use catalog::{
    Plan, PlanPhase, PlanPhaseRef, PlanRef, phase_name, plan_name, same_catalog_ref,
};
pub use error::EntitlementError;
pub use types::{ApiEventKind, EventKind, SubscriptionState, SubscriptionTransitionType};
