use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::{invalid_payload, OneSignalError};

/// Untyped value delivered by the native boundary: an object or a string that
/// depends on the channel and the platform.
pub type RawPayload = Value;

/// Low-level callback registered with the native event emitter.
pub type RawEventCallback = Arc<dyn Fn(RawPayload) + Send + Sync + 'static>;

/// Completion callback handed to native commands that report back asynchronously.
pub type NativeCallback = Arc<dyn Fn(Value) + Send + Sync + 'static>;

pub type Unsubscribe = Box<dyn FnOnce() + Send + 'static>;

/// Handle returned by [`NativeEventEmitter::add_listener`](crate::native::NativeEventEmitter::add_listener).
///
/// Calling [`remove`](Self::remove) unregisters the native listener. Dropping the handle
/// without calling it leaves the listener registered.
pub struct EmitterSubscription {
    event_name: String,
    remove: Option<Unsubscribe>,
}

impl EmitterSubscription {
    pub fn new<F>(event_name: impl Into<String>, remove: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            event_name: event_name.into(),
            remove: Some(Box::new(remove)),
        }
    }

    /// Subscription with nothing to undo.
    pub fn detached(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            remove: None,
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn remove(mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl fmt::Debug for EmitterSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmitterSubscription")
            .field("event_name", &self.event_name)
            .field("active", &self.remove.is_some())
            .finish()
    }
}

/// Log level understood by the native SDK (`Debug.setLogLevel` / `setAlertLevel`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum NativeLogLevel {
    None = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
    Verbose = 6,
}

impl NativeLogLevel {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// iOS authorization status reported by `permissionNative`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum NotificationPermission {
    NotDetermined = 0,
    Denied = 1,
    Authorized = 2,
    Provisional = 3,
    Ephemeral = 4,
}

impl TryFrom<i32> for NotificationPermission {
    type Error = OneSignalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(NotificationPermission::NotDetermined),
            1 => Ok(NotificationPermission::Denied),
            2 => Ok(NotificationPermission::Authorized),
            3 => Ok(NotificationPermission::Provisional),
            4 => Ok(NotificationPermission::Ephemeral),
            other => Err(invalid_payload(format!(
                "Unknown notification permission status {other}"
            ))),
        }
    }
}

/// Options for `LiveActivities::setup_default`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveActivitySetupOptions {
    /// Listen for pushToStart tokens of the default attributes structure.
    pub enable_push_to_start: bool,
    /// Listen for pushToUpdate tokens of every started default live activity.
    pub enable_push_to_update: bool,
}
