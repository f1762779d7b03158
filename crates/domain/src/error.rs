// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised when entitlement event data breaks an invariant.
///
/// Every variant is a programming-invariant violation: the data is corrupt,
/// or an upstream producer introduced a kind this crate does not know about.
/// Callers are expected to abort the operation, not retry it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntitlementError {
    /// The event kind is outside the known set (`API_USER`, `PHASE`).
    #[error("Unexpected event type {kind}")]
    UnexpectedEventKind {
        /// The unrecognized event kind, as received.
        kind: String,
    },
    /// An `API_USER` event arrived without its api event kind.
    #[error("Unexpected event type API_USER: missing api event type")]
    MissingApiEventKind,
    /// The api event kind is outside the known set.
    #[error("Unexpected api event type {kind}")]
    UnexpectedApiEventKind {
        /// The unrecognized api event kind, as received.
        kind: String,
    },
    /// The subscription state is outside the known set.
    #[error("Unexpected subscription state {state}")]
    UnexpectedSubscriptionState {
        /// The unrecognized state, as received.
        state: String,
    },
    /// The bus event type is outside the known set.
    #[error("Unexpected bus event type {kind}")]
    UnexpectedBusEventType {
        /// The unrecognized bus event type, as received.
        kind: String,
    },
}
