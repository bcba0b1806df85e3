use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::OneSignalResult;
use crate::native::{NativeHandle, RawPayload};
use crate::platform::Platform;

/// The notification's `rawPayload`; Android sends a JSON string, iOS an object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNotificationPayload {
    Object(Map<String, Value>),
    Text(String),
}

impl Default for RawNotificationPayload {
    fn default() -> Self {
        RawNotificationPayload::Object(Map::new())
    }
}

/// Wire shape of a notification as emitted by either native SDK.
///
/// Carries the union of both platforms' fields; [`Notification::from_raw`] keeps
/// only the ones belonging to the runtime platform.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNotification {
    pub notification_id: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        rename = "launchURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub launch_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_raw_payload")]
    pub raw_payload: RawNotificationPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_buttons: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub from_project_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_icon_accent_color: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub lock_screen_visibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_notification_id: Option<i32>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub badge: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub badge_increment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutable_content: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_available: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interruption_level: Option<String>,
}

// Native bridges disagree on whether some fields are strings or numbers.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => {
            log::debug!("ignoring non-scalar notification field: {other}");
            Ok(None)
        }
    }
}

// A null or otherwise unexpected `rawPayload` falls back to an empty object.
fn lenient_raw_payload<'de, D>(deserializer: D) -> Result<RawNotificationPayload, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => Ok(RawNotificationPayload::Object(map)),
        Some(Value::String(text)) => Ok(RawNotificationPayload::Text(text)),
        None | Some(Value::Null) => Ok(RawNotificationPayload::default()),
        Some(other) => {
            log::debug!("ignoring unexpected rawPayload: {other}");
            Ok(RawNotificationPayload::default())
        }
    }
}

/// Android-only notification fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AndroidDetails {
    pub group_key: Option<String>,
    pub group_message: Option<String>,
    pub led_color: Option<String>,
    pub priority: Option<i32>,
    pub small_icon: Option<String>,
    pub large_icon: Option<String>,
    pub big_picture: Option<String>,
    pub collapse_id: Option<String>,
    pub from_project_number: Option<String>,
    pub small_icon_accent_color: Option<String>,
    pub lock_screen_visibility: Option<String>,
    pub android_notification_id: Option<i32>,
}

/// iOS-only notification fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IosDetails {
    pub badge: Option<String>,
    pub badge_increment: Option<String>,
    pub category: Option<String>,
    pub thread_id: Option<String>,
    pub subtitle: Option<String>,
    pub template_id: Option<String>,
    pub template_name: Option<String>,
    pub attachments: Option<Value>,
    pub mutable_content: Option<bool>,
    pub content_available: Option<String>,
    pub relevance_score: Option<f64>,
    pub interruption_level: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlatformDetails {
    Android(AndroidDetails),
    Ios(IosDetails),
}

impl PlatformDetails {
    pub fn platform(&self) -> Platform {
        match self {
            PlatformDetails::Android(_) => Platform::Android,
            PlatformDetails::Ios(_) => Platform::Ios,
        }
    }
}

/// A push notification delivered by the native SDK.
///
/// Built once per raw payload. The only behaviour is [`display`](Self::display),
/// which asks the native SDK that produced it to render the notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    /// Opaque id used to correlate later native calls.
    pub notification_id: String,
    pub body: String,
    pub sound: Option<String>,
    pub title: Option<String>,
    pub launch_url: Option<String>,
    pub raw_payload: RawNotificationPayload,
    pub action_buttons: Option<Vec<Value>>,
    pub additional_data: Option<Value>,
    pub details: PlatformDetails,
    native: NativeHandle,
}

impl Notification {
    /// Projects `raw` for `platform`, dropping the other platform's fields.
    pub fn from_raw(raw: RawNotification, platform: Platform, native: NativeHandle) -> Self {
        let details = match platform {
            Platform::Android => PlatformDetails::Android(AndroidDetails {
                group_key: raw.group_key,
                group_message: raw.group_message,
                led_color: raw.led_color,
                priority: raw.priority,
                small_icon: raw.small_icon,
                large_icon: raw.large_icon,
                big_picture: raw.big_picture,
                collapse_id: raw.collapse_id,
                from_project_number: raw.from_project_number,
                small_icon_accent_color: raw.small_icon_accent_color,
                lock_screen_visibility: raw.lock_screen_visibility,
                android_notification_id: raw.android_notification_id,
            }),
            Platform::Ios => PlatformDetails::Ios(IosDetails {
                badge: raw.badge,
                badge_increment: raw.badge_increment,
                category: raw.category,
                thread_id: raw.thread_id,
                subtitle: raw.subtitle,
                template_id: raw.template_id,
                template_name: raw.template_name,
                attachments: raw.attachments,
                mutable_content: raw.mutable_content,
                content_available: raw.content_available,
                relevance_score: raw.relevance_score,
                interruption_level: raw.interruption_level,
            }),
        };

        Self {
            notification_id: raw.notification_id,
            body: raw.body,
            sound: raw.sound,
            title: raw.title,
            launch_url: raw.launch_url,
            raw_payload: raw.raw_payload,
            action_buttons: raw.action_buttons,
            additional_data: raw.additional_data,
            details,
            native,
        }
    }

    /// Decodes a raw native payload into a notification for `platform`.
    pub fn from_payload(
        payload: RawPayload,
        platform: Platform,
        native: NativeHandle,
    ) -> OneSignalResult<Self> {
        let raw: RawNotification = serde_json::from_value(payload)?;
        Ok(Self::from_raw(raw, platform, native))
    }

    pub fn platform(&self) -> Platform {
        self.details.platform()
    }

    pub fn android(&self) -> Option<&AndroidDetails> {
        match &self.details {
            PlatformDetails::Android(details) => Some(details),
            PlatformDetails::Ios(_) => None,
        }
    }

    pub fn ios(&self) -> Option<&IosDetails> {
        match &self.details {
            PlatformDetails::Ios(details) => Some(details),
            PlatformDetails::Android(_) => None,
        }
    }

    /// Asks the native SDK to render this notification now.
    pub fn display(&self) {
        self.native
            .payload_call("display", &self.notification_id, |native| {
                native.display_notification(&self.notification_id)
            });
    }

    pub(crate) fn native(&self) -> &NativeHandle {
        &self.native
    }
}
