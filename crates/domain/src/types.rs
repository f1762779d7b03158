// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::EntitlementError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a subscription.
///
/// A transition record captures one edge between two of these states.
/// Which edges are legal is decided by the engine that builds the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionState {
    /// The subscription is live and billable.
    Active,
    /// The subscription exists but has not started yet.
    Pending,
    /// The subscription has been cancelled.
    Cancelled,
}

impl SubscriptionState {
    /// Every known state, in declaration order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Pending, Self::Cancelled];

    /// Returns the persisted name of this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Pending => "PENDING",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for SubscriptionState {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "PENDING" => Ok(Self::Pending),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(EntitlementError::UnexpectedSubscriptionState {
                state: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SubscriptionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Origin category of an entitlement event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// Raised by a user-facing API call; sub-classified by [`ApiEventKind`].
    ApiUser,
    /// Raised when a plan moves into its next phase.
    Phase,
}

impl EventKind {
    /// Every known event kind, in declaration order.
    pub const ALL: [Self; 2] = [Self::ApiUser, Self::Phase];

    /// Returns the persisted name of this event kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApiUser => "API_USER",
            Self::Phase => "PHASE",
        }
    }
}

impl FromStr for EventKind {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "API_USER" => Ok(Self::ApiUser),
            "PHASE" => Ok(Self::Phase),
            _ => Err(EntitlementError::UnexpectedEventKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sub-classification of an [`EventKind::ApiUser`] event.
///
/// Each api event kind owns its mapping to a [`SubscriptionTransitionType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiEventKind {
    /// Entitlement data imported from another system.
    MigrateEntitlement,
    /// A new subscription was created.
    Create,
    /// Billing data imported from another system.
    MigrateBilling,
    /// The subscription changed plan.
    Change,
    /// A cancelled subscription was created again.
    ReCreate,
    /// The subscription was cancelled.
    Cancel,
    /// A pending cancellation was withdrawn.
    Uncancel,
}

impl ApiEventKind {
    /// Every known api event kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::MigrateEntitlement,
        Self::Create,
        Self::MigrateBilling,
        Self::Change,
        Self::ReCreate,
        Self::Cancel,
        Self::Uncancel,
    ];

    /// Returns the persisted name of this api event kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MigrateEntitlement => "MIGRATE_ENTITLEMENT",
            Self::Create => "CREATE",
            Self::MigrateBilling => "MIGRATE_BILLING",
            Self::Change => "CHANGE",
            Self::ReCreate => "RE_CREATE",
            Self::Cancel => "CANCEL",
            Self::Uncancel => "UNCANCEL",
        }
    }

    /// Returns the transition type this api event kind produces.
    #[must_use]
    pub const fn transition_type(&self) -> SubscriptionTransitionType {
        match self {
            Self::MigrateEntitlement => SubscriptionTransitionType::MigrateEntitlement,
            Self::Create => SubscriptionTransitionType::Create,
            Self::MigrateBilling => SubscriptionTransitionType::MigrateBilling,
            Self::Change => SubscriptionTransitionType::Change,
            Self::ReCreate => SubscriptionTransitionType::ReCreate,
            Self::Cancel => SubscriptionTransitionType::Cancel,
            Self::Uncancel => SubscriptionTransitionType::Uncancel,
        }
    }
}

impl FromStr for ApiEventKind {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EntitlementError::UnexpectedApiEventKind {
                kind: s.to_string(),
            })
    }
}

impl std::fmt::Display for ApiEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Semantic classification of a subscription transition.
///
/// This is what downstream consumers (invoicing, timelines, API responses)
/// act on; the raw event kinds are an implementation detail of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionTransitionType {
    MigrateEntitlement,
    Create,
    MigrateBilling,
    Change,
    ReCreate,
    Cancel,
    Uncancel,
    Phase,
}

impl SubscriptionTransitionType {
    /// Returns the persisted name of this transition type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MigrateEntitlement => "MIGRATE_ENTITLEMENT",
            Self::Create => "CREATE",
            Self::MigrateBilling => "MIGRATE_BILLING",
            Self::Change => "CHANGE",
            Self::ReCreate => "RE_CREATE",
            Self::Cancel => "CANCEL",
            Self::Uncancel => "UNCANCEL",
            Self::Phase => "PHASE",
        }
    }
}

impl std::fmt::Display for SubscriptionTransitionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
