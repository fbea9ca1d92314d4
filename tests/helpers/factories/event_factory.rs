use crate::engine::event::Event;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use std::collections::HashMap;

pub struct EventFactory {
    params: HashMap<String, Value>,
}

impl EventFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("event_type".into(), json!("Service"));
        params.insert("payload".into(), json!({ "service": "Test" }));
        Self { params }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn with_service(self, service: Option<&str>) -> Self {
        self.with("payload", json!({ "service": service }))
    }

    pub fn create(self) -> Event {
        Event::new(
            self.params["event_type"].as_str().unwrap(),
            self.params["payload"].clone(),
        )
    }

    pub fn create_list(self, count: usize) -> Vec<Event> {
        let event = self.create();
        vec![event; count]
    }

    /// Every fourth event (0, 4, 8, ...) has a null service, the rest "Test".
    pub fn reference_pattern(count: usize) -> Vec<Event> {
        (0..count)
            .map(|n| Event::service(if n % 4 == 0 { None } else { Some("Test") }))
            .collect()
    }

    /// `(service, count)` pairs expanded into events in random order.
    pub fn shuffled_mix(mix: &[(Option<&str>, usize)]) -> Vec<Event> {
        let mut events: Vec<Event> = mix
            .iter()
            .flat_map(|(service, count)| vec![Event::service(*service); *count])
            .collect();
        events.shuffle(&mut rand::thread_rng());
        events
    }
}
