#![doc = include_str!("README.md")]
mod adapter;
mod constants;
mod dispatcher;
mod listener;
pub(crate) mod logger;
mod transform;

pub use adapter::NativeBridgeAdapter;
pub use constants::Channel;
pub use dispatcher::{EventDispatcher, ListenerErrorHook, ListenerFailure};
pub use listener::{keys, ChannelEvent, EventListener, ListenerKey};
pub use transform::BridgeEvent;
