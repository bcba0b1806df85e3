use std::sync::Arc;

use crate::error::{invalid_argument, unsupported_platform, OneSignalError, OneSignalResult};
use crate::events::{ChannelEvent, EventDispatcher, EventListener, ListenerKey};
use crate::native::logger::LOGGER;
use crate::native::{NativeHandle, NativeModule};
use crate::platform::Platform;

/// State shared by every namespace of one [`OneSignal`](crate::onesignal::OneSignal) client.
#[derive(Clone, Debug)]
pub(crate) struct BridgeContext {
    pub(crate) native: NativeHandle,
    pub(crate) dispatcher: Arc<EventDispatcher>,
}

impl BridgeContext {
    pub(crate) fn new(native: NativeHandle, platform: Platform) -> Self {
        let dispatcher = Arc::new(EventDispatcher::new(platform, native.clone()));
        Self { native, dispatcher }
    }

    pub(crate) fn platform(&self) -> Platform {
        self.dispatcher.platform()
    }

    /// Asks the native side to start emitting on the key's channel, then registers
    /// `listener`. Nothing is registered when the module is missing.
    pub(crate) fn subscribe<E, F>(
        &self,
        key: ListenerKey<E>,
        listener: &EventListener<E>,
        enable: F,
    ) where
        E: ChannelEvent,
        F: FnOnce(&dyn NativeModule),
    {
        if self.native.command(enable) {
            self.dispatcher.add_listener(key, listener);
        }
    }

    pub(crate) fn unsubscribe<E>(&self, key: ListenerKey<E>, listener: &EventListener<E>) {
        self.dispatcher.remove_listener(key, listener);
    }

    pub(crate) fn require_platform(
        &self,
        required: Platform,
        operation: &str,
    ) -> OneSignalResult<()> {
        if self.platform() == required {
            return Ok(());
        }
        let message = format!(
            "{operation}: this function is not supported on {}",
            self.platform()
        );
        LOGGER.info(&message);
        Err(unsupported_platform(message))
    }
}

/// Logs and builds the error for an argument the native side must never see.
pub(crate) fn reject(message: impl Into<String>) -> OneSignalError {
    let message = message.into();
    LOGGER.error(&message);
    invalid_argument(message)
}

pub(crate) fn require_non_empty(value: &str, operation: &str, what: &str) -> OneSignalResult<()> {
    if value.trim().is_empty() {
        return Err(reject(format!("{operation}: {what} must not be empty")));
    }
    Ok(())
}

/// Collects a key list, refusing an empty list or an empty key.
pub(crate) fn collect_keys<I>(keys: I, operation: &str) -> OneSignalResult<Vec<String>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    if keys.is_empty() {
        return Err(reject(format!("{operation}: at least one key is required")));
    }
    for key in &keys {
        require_non_empty(key, operation, "key")?;
    }
    Ok(keys)
}

/// Validates a string map, refusing an empty map or an empty key.
pub(crate) fn require_entries(
    entries: &std::collections::HashMap<String, String>,
    operation: &str,
) -> OneSignalResult<()> {
    if entries.is_empty() {
        return Err(reject(format!("{operation}: at least one entry is required")));
    }
    for key in entries.keys() {
        require_non_empty(key, operation, "key")?;
    }
    Ok(())
}
