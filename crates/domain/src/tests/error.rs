// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::EntitlementError;

#[test]
fn test_entitlement_error_display() {
    let err: EntitlementError = EntitlementError::UnexpectedEventKind {
        kind: String::from("OVERDUE"),
    };
    assert_eq!(format!("{err}"), "Unexpected event type OVERDUE");

    let err: EntitlementError = EntitlementError::MissingApiEventKind;
    assert_eq!(
        format!("{err}"),
        "Unexpected event type API_USER: missing api event type"
    );

    let err: EntitlementError = EntitlementError::UnexpectedApiEventKind {
        kind: String::from("PAUSE"),
    };
    assert_eq!(format!("{err}"), "Unexpected api event type PAUSE");

    let err: EntitlementError = EntitlementError::UnexpectedSubscriptionState {
        state: String::from("FROZEN"),
    };
    assert_eq!(format!("{err}"), "Unexpected subscription state FROZEN");

    let err: EntitlementError = EntitlementError::UnexpectedBusEventType {
        kind: String::from("TAG_CREATION"),
    };
    assert_eq!(format!("{err}"), "Unexpected bus event type TAG_CREATION");
}

#[test]
fn test_entitlement_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(EntitlementError::MissingApiEventKind);
    assert!(err.source().is_none());
}

#[test]
fn test_entitlement_error_equality() {
    let a = EntitlementError::UnexpectedEventKind {
        kind: String::from("X"),
    };
    let b = a.clone();
    let c = EntitlementError::UnexpectedEventKind {
        kind: String::from("Y"),
    };

    assert_eq!(a, b);
    assert_ne!(a, c);
}
