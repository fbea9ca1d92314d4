use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::engine::errors::EngineError;
use crate::engine::window::GroupKey;

/// Event type name used by the reference service stream.
pub const SERVICE_EVENT_TYPE: &str = "Service";
/// Attribute carried by service events.
pub const SERVICE_FIELD: &str = "service";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub event_type: String,
    pub payload: Value,
}

impl Event {
    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
        }
    }

    /// A `Service` event whose `service` attribute may be absent.
    pub fn service(service: Option<&str>) -> Self {
        let mut payload = Map::new();
        payload.insert(
            SERVICE_FIELD.to_string(),
            match service {
                Some(s) => Value::String(s.to_string()),
                None => Value::Null,
            },
        );
        Self::new(SERVICE_EVENT_TYPE, Value::Object(payload))
    }

    /// Reads `field` as a group key.
    ///
    /// A missing attribute and JSON `null` both yield the null key. Strings map
    /// to themselves. Anything else is rejected, never coerced.
    pub fn group_key(&self, field: &str) -> Result<GroupKey, EngineError> {
        let obj = self.payload.as_object().ok_or_else(|| {
            warn!(target: "event::group_key", "Payload is not an object");
            EngineError::InvalidPayload(format!(
                "expected an object payload, found {}",
                json_type_name(&self.payload)
            ))
        })?;

        match obj.get(field) {
            None | Some(Value::Null) => Ok(GroupKey::null()),
            Some(Value::String(s)) => Ok(GroupKey::value(s.as_str())),
            Some(other) => {
                warn!(target: "event::group_key", field, "Group attribute has unsupported type");
                Err(EngineError::InvalidAttribute {
                    field: field.to_string(),
                    found: json_type_name(other),
                })
            }
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
