use std::fmt;

/// Closed catalog of native event channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    PermissionChanged,
    SubscriptionChanged,
    UserStateChanged,
    NotificationWillDisplay,
    NotificationClicked,
    InAppMessageClicked,
    InAppMessageWillDisplay,
    InAppMessageDidDisplay,
    InAppMessageWillDismiss,
    InAppMessageDidDismiss,
}

impl Channel {
    pub const ALL: [Channel; 10] = [
        Channel::PermissionChanged,
        Channel::SubscriptionChanged,
        Channel::UserStateChanged,
        Channel::NotificationWillDisplay,
        Channel::NotificationClicked,
        Channel::InAppMessageClicked,
        Channel::InAppMessageWillDisplay,
        Channel::InAppMessageDidDisplay,
        Channel::InAppMessageWillDismiss,
        Channel::InAppMessageDidDismiss,
    ];

    /// Event name used by the native emitter.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::PermissionChanged => "OneSignal-permissionChanged",
            Channel::SubscriptionChanged => "OneSignal-subscriptionChanged",
            Channel::UserStateChanged => "OneSignal-userStateChanged",
            Channel::NotificationWillDisplay => "OneSignal-notificationWillDisplayInForeground",
            Channel::NotificationClicked => "OneSignal-notificationClicked",
            Channel::InAppMessageClicked => "OneSignal-inAppMessageClicked",
            Channel::InAppMessageWillDisplay => "OneSignal-inAppMessageWillDisplay",
            Channel::InAppMessageDidDisplay => "OneSignal-inAppMessageDidDisplay",
            Channel::InAppMessageWillDismiss => "OneSignal-inAppMessageWillDismiss",
            Channel::InAppMessageDidDismiss => "OneSignal-inAppMessageDidDismiss",
        }
    }

    pub fn from_event_name(name: &str) -> Option<Channel> {
        Channel::ALL
            .into_iter()
            .find(|channel| channel.as_str() == name)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
