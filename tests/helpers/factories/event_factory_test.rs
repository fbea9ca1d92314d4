use crate::test_helpers::factories::EventFactory;
use crate::test_helpers::factory::Factory;
use serde_json::json;

#[test]
fn test_event_factory() {
    let event = Factory::event()
        .with("event_type", "Request")
        .with("payload", json!({ "region": "eu" }))
        .create();

    assert_eq!(event.event_type, "Request");
    assert_eq!(event.payload["region"], json!("eu"));
}

#[test]
fn test_reference_pattern() {
    let events = EventFactory::reference_pattern(10);
    let nulls = events
        .iter()
        .filter(|e| e.payload["service"].is_null())
        .count();
    assert_eq!(events.len(), 10);
    assert_eq!(nulls, 3);
}

#[test]
fn test_shuffled_mix_keeps_counts() {
    let events = EventFactory::shuffled_mix(&[(None, 2), (Some("a"), 5)]);
    assert_eq!(events.len(), 7);
    assert_eq!(
        events
            .iter()
            .filter(|e| e.payload["service"] == json!("a"))
            .count(),
        5
    );
}
