#![doc = include_str!("README.md")]
mod api;
mod events;
mod notification;

pub use api::Notifications;
pub use events::{
    NotificationClickEvent, NotificationClickResult, NotificationReceivedEvent,
    NotificationWillDisplayEvent,
};
pub use notification::{
    AndroidDetails, IosDetails, Notification, PlatformDetails, RawNotification,
    RawNotificationPayload,
};
