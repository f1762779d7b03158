// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::classify::derive_transition_type;
use entitlement_bus::{BusEvent, BusEventType};
use entitlement_domain::{
    ApiEventKind, EntitlementError, EventKind, PlanPhaseRef, PlanRef, SubscriptionState,
    SubscriptionTransitionType, phase_name, plan_name, same_catalog_ref,
};
use time::OffsetDateTime;
use uuid::Uuid;

/// Identity of a transition and the subscription it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionIds {
    /// Identity of this transition event.
    pub event_id: Uuid,
    /// The subscription that transitioned.
    pub subscription_id: Uuid,
    /// The bundle grouping the subscription.
    pub bundle_id: Uuid,
}

/// What raised a transition, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOrigin {
    /// Origin category of the event.
    pub event_kind: EventKind,
    /// Sub-classification; required when `event_kind` is `ApiUser`.
    pub api_event_kind: Option<ApiEventKind>,
    /// When the change was requested.
    pub requested_at: OffsetDateTime,
    /// When the change takes (or took) effect.
    pub effective_at: OffsetDateTime,
}

/// One side (before or after) of a subscription transition.
///
/// Any field may be absent: there is no plan before a creation, and no plan
/// after a cancellation.
#[derive(Debug, Clone)]
pub struct TransitionSide {
    pub state: Option<SubscriptionState>,
    pub plan: Option<PlanRef>,
    pub phase: Option<PlanPhaseRef>,
    pub price_list: Option<String>,
}

impl PartialEq for TransitionSide {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && same_catalog_ref(self.plan.as_ref(), other.plan.as_ref())
            && same_catalog_ref(self.phase.as_ref(), other.phase.as_ref())
            && self.price_list == other.price_list
    }
}

impl Eq for TransitionSide {}

/// An immutable record that a subscription moved from one plan, phase or
/// state to another.
///
/// Every field is supplied at construction. There are no setters; the only
/// way to obtain a record with a different remaining-event count is
/// [`TransitionRecord::with_remaining_events_for_user_operation`], which
/// returns a new record and leaves this one untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    ids: TransitionIds,
    origin: TransitionOrigin,
    previous: TransitionSide,
    next: TransitionSide,
    total_ordering: i64,
    user_token: Option<Uuid>,
    is_from_disk: bool,
    remaining_events_for_user_operation: u32,
}

impl TransitionRecord {
    /// Creates a new transition record.
    ///
    /// The remaining-event count starts at 0.
    ///
    /// # Arguments
    ///
    /// * `ids` - Event, subscription and bundle identity
    /// * `origin` - Event kinds and timestamps
    /// * `previous` - State, plan, phase and price list before the transition
    /// * `next` - State, plan, phase and price list after the transition
    /// * `total_ordering` - Replay sequence number assigned by persistence
    /// * `user_token` - Correlation token of the originating user operation
    /// * `is_from_disk` - Whether the record was rehydrated from storage
    #[must_use]
    pub const fn new(
        ids: TransitionIds,
        origin: TransitionOrigin,
        previous: TransitionSide,
        next: TransitionSide,
        total_ordering: i64,
        user_token: Option<Uuid>,
        is_from_disk: bool,
    ) -> Self {
        Self {
            ids,
            origin,
            previous,
            next,
            total_ordering,
            user_token,
            is_from_disk,
            remaining_events_for_user_operation: 0,
        }
    }

    /// Returns a copy of this record with a new remaining-event count.
    ///
    /// Every other field is carried over unchanged. The count is trusted as
    /// given; see [`crate::annotate_user_operation`] for computing it.
    #[must_use]
    pub fn with_remaining_events_for_user_operation(&self, remaining: u32) -> Self {
        tracing::debug!(
            event_id = %self.ids.event_id,
            subscription_id = %self.ids.subscription_id,
            remaining,
            "Copying transition with remaining user operation events"
        );

        Self {
            remaining_events_for_user_operation: remaining,
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn event_id(&self) -> Uuid {
        self.ids.event_id
    }

    #[must_use]
    pub const fn subscription_id(&self) -> Uuid {
        self.ids.subscription_id
    }

    #[must_use]
    pub const fn bundle_id(&self) -> Uuid {
        self.ids.bundle_id
    }

    #[must_use]
    pub const fn ids(&self) -> &TransitionIds {
        &self.ids
    }

    #[must_use]
    pub const fn event_kind(&self) -> EventKind {
        self.origin.event_kind
    }

    #[must_use]
    pub const fn api_event_kind(&self) -> Option<ApiEventKind> {
        self.origin.api_event_kind
    }

    #[must_use]
    pub const fn requested_transition_time(&self) -> OffsetDateTime {
        self.origin.requested_at
    }

    #[must_use]
    pub const fn effective_transition_time(&self) -> OffsetDateTime {
        self.origin.effective_at
    }

    /// The state, plan, phase and price list before the transition.
    #[must_use]
    pub const fn previous_side(&self) -> &TransitionSide {
        &self.previous
    }

    /// The state, plan, phase and price list after the transition.
    #[must_use]
    pub const fn next_side(&self) -> &TransitionSide {
        &self.next
    }

    #[must_use]
    pub const fn previous_state(&self) -> Option<SubscriptionState> {
        self.previous.state
    }

    #[must_use]
    pub const fn previous_plan(&self) -> Option<&PlanRef> {
        self.previous.plan.as_ref()
    }

    #[must_use]
    pub const fn previous_phase(&self) -> Option<&PlanPhaseRef> {
        self.previous.phase.as_ref()
    }

    #[must_use]
    pub fn previous_price_list(&self) -> Option<&str> {
        self.previous.price_list.as_deref()
    }

    #[must_use]
    pub const fn next_state(&self) -> Option<SubscriptionState> {
        self.next.state
    }

    #[must_use]
    pub const fn next_plan(&self) -> Option<&PlanRef> {
        self.next.plan.as_ref()
    }

    #[must_use]
    pub const fn next_phase(&self) -> Option<&PlanPhaseRef> {
        self.next.phase.as_ref()
    }

    #[must_use]
    pub fn next_price_list(&self) -> Option<&str> {
        self.next.price_list.as_deref()
    }

    /// Replay sequence number; strictly increasing per subscription.
    #[must_use]
    pub const fn total_ordering(&self) -> i64 {
        self.total_ordering
    }

    #[must_use]
    pub const fn is_from_disk(&self) -> bool {
        self.is_from_disk
    }

    #[must_use]
    pub const fn user_token(&self) -> Option<Uuid> {
        self.user_token
    }

    /// How many more events the originating user operation will emit after
    /// this one.
    #[must_use]
    pub const fn remaining_events_for_user_operation(&self) -> u32 {
        self.remaining_events_for_user_operation
    }

    /// Classifies this transition.
    ///
    /// # Errors
    ///
    /// Returns `EntitlementError::MissingApiEventKind` if this is an
    /// `API_USER` event recorded without its api event kind.
    pub fn transition_type(&self) -> Result<SubscriptionTransitionType, EntitlementError> {
        derive_transition_type(self.origin.event_kind, self.origin.api_event_kind)
    }

    /// Key defining the canonical replay order across all subscriptions.
    #[must_use]
    pub const fn replay_key(&self) -> (Uuid, i64) {
        (self.ids.subscription_id, self.total_ordering)
    }
}

impl BusEvent for TransitionRecord {
    fn bus_event_type(&self) -> BusEventType {
        BusEventType::SubscriptionTransition
    }

    fn user_token(&self) -> Option<Uuid> {
        self.user_token
    }
}

fn or_null<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("null"), |v| v.to_string())
}

impl std::fmt::Display for TransitionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SubscriptionTransition [eventId={}, subscriptionId={}, eventType={}, \
             apiEventType={}, requestedTransitionTime={}, effectiveTransitionTime={}, \
             previousState={}, previousPlan={}, previousPhase={}, previousPriceList {}, \
             nextState={}, nextPlan={}, nextPriceList {}, nextPhase={}]",
            self.ids.event_id,
            self.ids.subscription_id,
            self.origin.event_kind,
            or_null(self.origin.api_event_kind),
            self.origin.requested_at,
            self.origin.effective_at,
            or_null(self.previous.state),
            plan_name(self.previous.plan.as_ref()),
            phase_name(self.previous.phase.as_ref()),
            or_null(self.previous.price_list.as_deref()),
            or_null(self.next.state),
            plan_name(self.next.plan.as_ref()),
            or_null(self.next.price_list.as_deref()),
            phase_name(self.next.phase.as_ref()),
        )
    }
}
