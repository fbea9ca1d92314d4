mod channel;
mod fanout;
mod listener;

pub use channel::{BatchStream, ChannelListener};
pub use fanout::FanoutListener;
pub use listener::BatchListener;
