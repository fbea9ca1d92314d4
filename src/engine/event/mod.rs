mod event;

pub use event::{Event, SERVICE_EVENT_TYPE, SERVICE_FIELD};

#[cfg(test)]
mod event_test;
