// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transition classification.
//!
//! Maps the raw `(event kind, api event kind)` pair recorded by the engine to
//! the semantic [`SubscriptionTransitionType`] consumers act on.

use entitlement_domain::{ApiEventKind, EntitlementError, EventKind, SubscriptionTransitionType};
use std::str::FromStr;

/// Derives the transition type of an event.
///
/// `API_USER` events take the type their api event kind maps to. `PHASE`
/// events are always `PHASE`; their api event kind is never consulted.
///
/// # Errors
///
/// Returns `EntitlementError::MissingApiEventKind` if `event_kind` is
/// `ApiUser` and `api_event_kind` is `None`.
pub fn derive_transition_type(
    event_kind: EventKind,
    api_event_kind: Option<ApiEventKind>,
) -> Result<SubscriptionTransitionType, EntitlementError> {
    match event_kind {
        EventKind::ApiUser => api_event_kind
            .as_ref()
            .map(ApiEventKind::transition_type)
            .ok_or_else(|| {
                tracing::error!(%event_kind, "API_USER event has no api event kind");
                EntitlementError::MissingApiEventKind
            }),
        EventKind::Phase => Ok(SubscriptionTransitionType::Phase),
    }
}

/// Derives the transition type from persisted kind names.
///
/// The api event kind name is only parsed for `API_USER` events.
///
/// # Errors
///
/// Returns an error if:
/// - `event_kind` is not a known event kind (`UnexpectedEventKind`)
/// - the event is `API_USER` and `api_event_kind` is not a known api event
///   kind (`UnexpectedApiEventKind`)
/// - the event is `API_USER` and `api_event_kind` is absent
///   (`MissingApiEventKind`)
pub fn classify_raw(
    event_kind: &str,
    api_event_kind: Option<&str>,
) -> Result<SubscriptionTransitionType, EntitlementError> {
    let event_kind: EventKind = EventKind::from_str(event_kind).inspect_err(|err| {
        tracing::error!(event_kind, %err, "Cannot classify transition");
    })?;

    let api_event_kind: Option<ApiEventKind> = match event_kind {
        EventKind::ApiUser => api_event_kind
            .map(ApiEventKind::from_str)
            .transpose()
            .inspect_err(|err| {
                tracing::error!(%event_kind, %err, "Cannot classify transition");
            })?,
        EventKind::Phase => None,
    };

    derive_transition_type(event_kind, api_event_kind)
}
