use std::time::Duration;

use tokio::time::Instant;

use crate::engine::errors::EngineError;

/// Length of a tumbling time-batch window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowInterval(Duration);

impl WindowInterval {
    /// Accepts whole or fractional seconds. Zero, negative and non-finite
    /// values are rejected rather than replaced by a default.
    pub fn from_secs_f64(secs: f64) -> Result<Self, EngineError> {
        if !secs.is_finite() {
            return Err(EngineError::InvalidInterval(format!(
                "{} is not a finite number of seconds",
                secs
            )));
        }
        if secs <= 0.0 {
            return Err(EngineError::InvalidInterval(format!(
                "interval must be positive, got {} seconds",
                secs
            )));
        }
        let duration = Duration::try_from_secs_f64(secs)
            .map_err(|e| EngineError::InvalidInterval(e.to_string()))?;
        Self::from_duration(duration)
    }

    pub fn from_duration(duration: Duration) -> Result<Self, EngineError> {
        if duration.is_zero() {
            return Err(EngineError::InvalidInterval(
                "interval rounds down to zero".to_string(),
            ));
        }
        Ok(Self(duration))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// First window boundary after `origin`. Fails when either the first or
    /// the second boundary is past what `Instant` can represent.
    pub fn first_boundary(&self, origin: Instant) -> Result<Instant, EngineError> {
        let first = origin.checked_add(self.0);
        match first.and_then(|first| first.checked_add(self.0).map(|_| first)) {
            Some(first) => Ok(first),
            None => Err(EngineError::InvalidInterval(format!(
                "{} seconds overflows the clock",
                self.0.as_secs_f64()
            ))),
        }
    }
}
