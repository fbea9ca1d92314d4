use serde_json::json;

use super::Event;
use crate::engine::errors::EngineError;
use crate::engine::window::GroupKey;

#[test]
fn service_event_carries_optional_attribute() {
    let e = Event::service(Some("Test"));
    assert_eq!(e.event_type, "Service");
    assert_eq!(e.payload, json!({ "service": "Test" }));

    let e = Event::service(None);
    assert_eq!(e.payload, json!({ "service": null }));
}

#[test]
fn group_key_reads_strings_and_nulls() {
    assert_eq!(
        Event::service(Some("Test")).group_key("service").unwrap(),
        GroupKey::value("Test")
    );
    assert_eq!(
        Event::service(None).group_key("service").unwrap(),
        GroupKey::null()
    );
    assert_eq!(
        Event::new("Service", json!({ "service": "" }))
            .group_key("service")
            .unwrap(),
        GroupKey::value("")
    );
}

#[test]
fn missing_attribute_is_null_group() {
    let e = Event::new("Service", json!({ "other": 1 }));
    assert_eq!(e.group_key("service").unwrap(), GroupKey::null());
}

#[test]
fn non_string_attribute_is_rejected() {
    let e = Event::new("Service", json!({ "service": 42 }));
    match e.group_key("service") {
        Err(EngineError::InvalidAttribute { field, found }) => {
            assert_eq!(field, "service");
            assert_eq!(found, "a number");
        }
        other => panic!("expected InvalidAttribute, got {:?}", other),
    }
}

#[test]
fn non_object_payload_is_rejected() {
    let e = Event::new("Service", json!(["Test"]));
    assert!(matches!(
        e.group_key("service"),
        Err(EngineError::InvalidPayload(_))
    ));
}

#[test]
fn event_round_trips_through_json() {
    let e = Event::service(Some("Test"));
    let text = serde_json::to_string(&e).unwrap();
    let back: Event = serde_json::from_str(&text).unwrap();
    assert_eq!(back, e);
}
