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
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Event bus contract.
//!
//! This crate knows nothing about transport, serialization format or
//! subscribers. It defines the routing category every bus event declares
//! and the minimal contract the dispatcher reads from an event.

use entitlement_domain::EntitlementError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[cfg(test)]
mod tests;

/// Routing category of an event on the bus.
///
/// The dispatcher uses this to select subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusEventType {
    /// A subscription moved between plans, phases or states.
    SubscriptionTransition,
    /// An invoice was generated.
    InvoiceCreation,
    /// A payment completed.
    PaymentInfo,
    /// A payment failed.
    PaymentError,
    /// An account was created.
    AccountCreate,
    /// An account was modified.
    AccountChange,
}

impl BusEventType {
    /// Every known bus event type, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::SubscriptionTransition,
        Self::InvoiceCreation,
        Self::PaymentInfo,
        Self::PaymentError,
        Self::AccountCreate,
        Self::AccountChange,
    ];

    /// Returns the routing name of this bus event type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SubscriptionTransition => "SUBSCRIPTION_TRANSITION",
            Self::InvoiceCreation => "INVOICE_CREATION",
            Self::PaymentInfo => "PAYMENT_INFO",
            Self::PaymentError => "PAYMENT_ERROR",
            Self::AccountCreate => "ACCOUNT_CREATE",
            Self::AccountChange => "ACCOUNT_CHANGE",
        }
    }
}

impl FromStr for BusEventType {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EntitlementError::UnexpectedBusEventType {
                kind: s.to_string(),
            })
    }
}

impl std::fmt::Display for BusEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable event that can be posted on the bus.
///
/// Implementors must be safe to hand to another thread: once posted, an
/// event is shared between the dispatcher and every subscriber.
pub trait BusEvent: Send + Sync {
    /// The routing category of this event.
    fn bus_event_type(&self) -> BusEventType;

    /// Token correlating this event with the user operation that caused it.
    ///
    /// `None` for events not triggered by a user operation.
    fn user_token(&self) -> Option<Uuid>;
}
