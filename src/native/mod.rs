#![doc = include_str!("README.md")]
mod handle;
pub(crate) mod logger;
mod module;
mod types;

pub use handle::NativeHandle;
pub use module::{NativeEventEmitter, NativeModule};
pub use types::{
    EmitterSubscription, LiveActivitySetupOptions, NativeCallback, NativeLogLevel,
    NotificationPermission, RawEventCallback, RawPayload, Unsubscribe,
};
