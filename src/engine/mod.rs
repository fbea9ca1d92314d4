pub mod errors;
pub mod event;
pub mod listener;
pub mod statement;
pub mod window;

pub use errors::*;
