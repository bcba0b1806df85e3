use serde::{Deserialize, Serialize};

use crate::error::OneSignalResult;
use crate::native::{NativeHandle, RawPayload};
use crate::notifications::notification::{Notification, RawNotification};
use crate::platform::Platform;

/// Delivered when a notification arrives while the app is in the foreground.
///
/// The wrapped notification is a fresh copy owned by the event.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationWillDisplayEvent {
    notification: Notification,
}

impl NotificationWillDisplayEvent {
    pub fn new(notification: &Notification) -> Self {
        Self {
            notification: notification.clone(),
        }
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Stops the native SDK from auto-displaying the notification.
    ///
    /// Every call is forwarded; the native side decides what a repeat means.
    pub fn prevent_default(&self) {
        let id = &self.notification.notification_id;
        self.notification
            .native()
            .payload_call("preventDefault", id, |native| native.prevent_default(id));
    }
}

/// Older received-event shape kept for hosts that drive completion by hand.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationReceivedEvent {
    notification: Notification,
}

impl NotificationReceivedEvent {
    pub fn new(notification: &Notification) -> Self {
        Self {
            notification: notification.clone(),
        }
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Finishes native handling of the received notification.
    ///
    /// `None` suppresses display using this event's id. `Some` displays the
    /// given notification using *its* id, which is not required to match.
    pub fn complete(&self, notification: Option<&Notification>) {
        match notification {
            Some(shown) => {
                let id = &shown.notification_id;
                self.notification.native().payload_call("complete", id, |native| {
                    native.complete_notification_event(id, true)
                });
            }
            None => {
                let id = &self.notification.notification_id;
                self.notification.native().payload_call("complete", id, |native| {
                    native.complete_notification_event(id, false)
                });
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationClickResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Delivered when the user taps a notification or one of its buttons.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationClickEvent {
    pub result: NotificationClickResult,
    pub notification: Notification,
}

#[derive(Deserialize)]
struct RawClickEvent {
    #[serde(default)]
    result: NotificationClickResult,
    notification: RawNotification,
}

impl NotificationClickEvent {
    pub(crate) fn from_payload(
        payload: RawPayload,
        platform: Platform,
        native: NativeHandle,
    ) -> OneSignalResult<Self> {
        let raw: RawClickEvent = serde_json::from_value(payload)?;
        Ok(Self {
            result: raw.result,
            notification: Notification::from_raw(raw.notification, platform, native),
        })
    }
}
