// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog boundary.
//!
//! Plans and phases are owned by the catalog subsystem. Entitlement code only
//! holds shared references to them and only ever reads their names, for
//! diagnostic rendering.

use std::fmt::Debug;
use std::sync::Arc;

/// A catalog plan, as seen from entitlement.
pub trait Plan: Debug + Send + Sync {
    /// The catalog name of this plan.
    fn name(&self) -> &str;
}

/// A phase of a catalog plan (e.g. trial, evergreen), as seen from entitlement.
pub trait PlanPhase: Debug + Send + Sync {
    /// The catalog name of this phase.
    fn name(&self) -> &str;
}

/// Shared, catalog-owned plan reference.
pub type PlanRef = Arc<dyn Plan>;

/// Shared, catalog-owned phase reference.
pub type PlanPhaseRef = Arc<dyn PlanPhase>;

/// Compares two optional catalog references by identity.
///
/// Catalog objects are identity-bearing: two references are the same plan
/// only if they point at the same catalog object.
#[must_use]
pub fn same_catalog_ref<T: ?Sized>(left: Option<&Arc<T>>, right: Option<&Arc<T>>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => Arc::ptr_eq(l, r),
        (None, None) => true,
        _ => false,
    }
}

/// Renders an optional plan by name, or `null` when absent.
#[must_use]
pub fn plan_name(plan: Option<&PlanRef>) -> &str {
    plan.map_or("null", |p| p.name())
}

/// Renders an optional phase by name, or `null` when absent.
#[must_use]
pub fn phase_name(phase: Option<&PlanPhaseRef>) -> &str {
    phase.map_or("null", |p| p.name())
}
