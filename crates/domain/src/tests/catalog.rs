// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Plan, PlanPhase, PlanPhaseRef, PlanRef, phase_name, plan_name, same_catalog_ref};
use std::sync::Arc;

#[derive(Debug)]
struct NamedPlan(&'static str);

impl Plan for NamedPlan {
    fn name(&self) -> &str {
        self.0
    }
}

#[derive(Debug)]
struct NamedPhase(&'static str);

impl PlanPhase for NamedPhase {
    fn name(&self) -> &str {
        self.0
    }
}

#[test]
fn test_plan_and_phase_names_render() {
    let plan: PlanRef = Arc::new(NamedPlan("shotgun-monthly"));
    let phase: PlanPhaseRef = Arc::new(NamedPhase("shotgun-monthly-trial"));

    assert_eq!(plan_name(Some(&plan)), "shotgun-monthly");
    assert_eq!(phase_name(Some(&phase)), "shotgun-monthly-trial");
}

#[test]
fn test_absent_references_render_as_null() {
    assert_eq!(plan_name(None), "null");
    assert_eq!(phase_name(None), "null");
}

#[test]
fn test_catalog_references_compare_by_identity() {
    let plan: PlanRef = Arc::new(NamedPlan("pistol-monthly"));
    let shared: PlanRef = Arc::clone(&plan);
    let lookalike: PlanRef = Arc::new(NamedPlan("pistol-monthly"));

    assert!(same_catalog_ref(Some(&plan), Some(&shared)));
    assert!(!same_catalog_ref(Some(&plan), Some(&lookalike)));
    assert!(!same_catalog_ref(Some(&plan), None));
    assert!(same_catalog_ref::<dyn Plan>(None, None));
}
