mod metrics;
mod state;
mod statement;

pub use metrics::StatementMetrics;
pub use statement::{StopMode, WindowedCountStatement};

#[cfg(test)]
mod state_test;
