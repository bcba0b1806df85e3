use serde::Deserialize;
use serde_json::Value;

use crate::error::OneSignalResult;
use crate::events::constants::Channel;
use crate::events::listener::ChannelEvent;
use crate::in_app_messages::{
    InAppMessageClickEvent, InAppMessageDidDismissEvent, InAppMessageDidDisplayEvent,
    InAppMessageWillDismissEvent, InAppMessageWillDisplayEvent,
};
use crate::native::{NativeHandle, RawPayload};
use crate::notifications::{Notification, NotificationClickEvent, NotificationWillDisplayEvent};
use crate::platform::Platform;
use crate::user::{PushSubscriptionChangedState, UserChangedState};

/// A raw native payload converted into the value its channel's listeners receive.
#[derive(Clone, Debug, PartialEq)]
pub enum BridgeEvent {
    PermissionChanged(bool),
    PushSubscriptionChanged(PushSubscriptionChangedState),
    UserStateChanged(UserChangedState),
    NotificationWillDisplay(NotificationWillDisplayEvent),
    NotificationClicked(NotificationClickEvent),
    InAppMessageClicked(InAppMessageClickEvent),
    InAppMessageWillDisplay(InAppMessageWillDisplayEvent),
    InAppMessageDidDisplay(InAppMessageDidDisplayEvent),
    InAppMessageWillDismiss(InAppMessageWillDismissEvent),
    InAppMessageDidDismiss(InAppMessageDidDismissEvent),
}

impl BridgeEvent {
    pub fn channel(&self) -> Channel {
        match self {
            BridgeEvent::PermissionChanged(_) => Channel::PermissionChanged,
            BridgeEvent::PushSubscriptionChanged(_) => Channel::SubscriptionChanged,
            BridgeEvent::UserStateChanged(_) => Channel::UserStateChanged,
            BridgeEvent::NotificationWillDisplay(_) => Channel::NotificationWillDisplay,
            BridgeEvent::NotificationClicked(_) => Channel::NotificationClicked,
            BridgeEvent::InAppMessageClicked(_) => Channel::InAppMessageClicked,
            BridgeEvent::InAppMessageWillDisplay(_) => Channel::InAppMessageWillDisplay,
            BridgeEvent::InAppMessageDidDisplay(_) => Channel::InAppMessageDidDisplay,
            BridgeEvent::InAppMessageWillDismiss(_) => Channel::InAppMessageWillDismiss,
            BridgeEvent::InAppMessageDidDismiss(_) => Channel::InAppMessageDidDismiss,
        }
    }
}

macro_rules! channel_event {
    ($($variant:ident => $event:ty),* $(,)?) => {
        $(
            impl ChannelEvent for $event {
                fn from_event(event: &BridgeEvent) -> Option<&Self> {
                    match event {
                        BridgeEvent::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

channel_event! {
    PermissionChanged => bool,
    PushSubscriptionChanged => PushSubscriptionChangedState,
    UserStateChanged => UserChangedState,
    NotificationWillDisplay => NotificationWillDisplayEvent,
    NotificationClicked => NotificationClickEvent,
    InAppMessageClicked => InAppMessageClickEvent,
    InAppMessageWillDisplay => InAppMessageWillDisplayEvent,
    InAppMessageDidDisplay => InAppMessageDidDisplayEvent,
    InAppMessageWillDismiss => InAppMessageWillDismissEvent,
    InAppMessageDidDismiss => InAppMessageDidDismissEvent,
}

/// What payload objects need to call back into the native side.
#[derive(Clone, Debug)]
pub(crate) struct TransformContext {
    pub(crate) platform: Platform,
    pub(crate) native: NativeHandle,
}

#[derive(Deserialize)]
struct PermissionPayload {
    permission: bool,
}

pub(crate) fn transform(
    channel: Channel,
    raw: RawPayload,
    context: &TransformContext,
) -> OneSignalResult<BridgeEvent> {
    let raw = unwrap_json_text(raw);
    let event = match channel {
        Channel::PermissionChanged => {
            let payload: PermissionPayload = serde_json::from_value(raw)?;
            BridgeEvent::PermissionChanged(payload.permission)
        }
        Channel::NotificationWillDisplay => {
            let notification =
                Notification::from_payload(raw, context.platform, context.native.clone())?;
            BridgeEvent::NotificationWillDisplay(NotificationWillDisplayEvent::new(&notification))
        }
        Channel::NotificationClicked => BridgeEvent::NotificationClicked(
            NotificationClickEvent::from_payload(raw, context.platform, context.native.clone())?,
        ),
        Channel::SubscriptionChanged => {
            BridgeEvent::PushSubscriptionChanged(serde_json::from_value(raw)?)
        }
        Channel::UserStateChanged => BridgeEvent::UserStateChanged(serde_json::from_value(raw)?),
        Channel::InAppMessageClicked => {
            BridgeEvent::InAppMessageClicked(serde_json::from_value(raw)?)
        }
        Channel::InAppMessageWillDisplay => {
            BridgeEvent::InAppMessageWillDisplay(serde_json::from_value(raw)?)
        }
        Channel::InAppMessageDidDisplay => {
            BridgeEvent::InAppMessageDidDisplay(serde_json::from_value(raw)?)
        }
        Channel::InAppMessageWillDismiss => {
            BridgeEvent::InAppMessageWillDismiss(serde_json::from_value(raw)?)
        }
        Channel::InAppMessageDidDismiss => {
            BridgeEvent::InAppMessageDidDismiss(serde_json::from_value(raw)?)
        }
    };
    Ok(event)
}

// Some hosts hand over the payload as JSON text rather than a decoded object.
fn unwrap_json_text(raw: RawPayload) -> RawPayload {
    if let Value::String(text) = &raw {
        if let Ok(decoded @ Value::Object(_)) = serde_json::from_str::<Value>(text) {
            return decoded;
        }
    }
    raw
}
