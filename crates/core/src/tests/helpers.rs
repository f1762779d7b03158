// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{TransitionIds, TransitionOrigin, TransitionRecord, TransitionSide};
use entitlement_domain::{
    ApiEventKind, EventKind, Plan, PlanPhase, PlanPhaseRef, PlanRef, SubscriptionState,
};
use std::sync::Arc;
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

pub const SUBSCRIPTION_ID: Uuid = Uuid::from_u128(0x5ab5_0001);
pub const BUNDLE_ID: Uuid = Uuid::from_u128(0xb0_0001);

pub const REQUESTED_AT: OffsetDateTime = datetime!(2026-01-15 10:00 UTC);
pub const EFFECTIVE_AT: OffsetDateTime = datetime!(2026-02-14 10:00 UTC);

#[derive(Debug)]
pub struct TestPlan(pub &'static str);

impl Plan for TestPlan {
    fn name(&self) -> &str {
        self.0
    }
}

#[derive(Debug)]
pub struct TestPhase(pub &'static str);

impl PlanPhase for TestPhase {
    fn name(&self) -> &str {
        self.0
    }
}

pub fn create_test_plan(name: &'static str) -> PlanRef {
    Arc::new(TestPlan(name))
}

pub fn create_test_phase(name: &'static str) -> PlanPhaseRef {
    Arc::new(TestPhase(name))
}

pub const fn create_test_ids(event: u128) -> TransitionIds {
    TransitionIds {
        event_id: Uuid::from_u128(event),
        subscription_id: SUBSCRIPTION_ID,
        bundle_id: BUNDLE_ID,
    }
}

pub const fn create_test_origin(
    event_kind: EventKind,
    api_event_kind: Option<ApiEventKind>,
) -> TransitionOrigin {
    TransitionOrigin {
        event_kind,
        api_event_kind,
        requested_at: REQUESTED_AT,
        effective_at: EFFECTIVE_AT,
    }
}

/// The "before" side of a subscription creation: nothing yet.
pub const fn create_empty_side() -> TransitionSide {
    TransitionSide {
        state: None,
        plan: None,
        phase: None,
        price_list: None,
    }
}

pub fn create_active_side(plan: &PlanRef, phase: &PlanPhaseRef) -> TransitionSide {
    TransitionSide {
        state: Some(SubscriptionState::Active),
        plan: Some(Arc::clone(plan)),
        phase: Some(Arc::clone(phase)),
        price_list: Some(String::from("DEFAULT")),
    }
}

/// A fresh `CREATE` transition for the test subscription.
pub fn create_test_creation(event: u128, total_ordering: i64) -> TransitionRecord {
    let plan: PlanRef = create_test_plan("PlanA");
    let phase: PlanPhaseRef = create_test_phase("PlanA-Trial");

    TransitionRecord::new(
        create_test_ids(event),
        create_test_origin(EventKind::ApiUser, Some(ApiEventKind::Create)),
        create_empty_side(),
        create_active_side(&plan, &phase),
        total_ordering,
        Some(Uuid::from_u128(0x70_0001)),
        false,
    )
}
