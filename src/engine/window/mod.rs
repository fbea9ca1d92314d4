mod accumulator;
mod batch;
mod clock;
mod group_key;
mod interval;
mod registry;

pub use accumulator::WindowAccumulator;
pub use batch::{ColumnSpec, ResultRow, WindowBatch};
pub use clock::WindowClock;
pub use group_key::GroupKey;
pub use interval::WindowInterval;
pub use registry::GroupRegistry;
