use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::events::constants::Channel;
use crate::events::transform::BridgeEvent;

/// Application callback for one event type.
///
/// Two listeners are the same listener when they share the same callback
/// allocation, so clones of one `EventListener` remove each other.
pub struct EventListener<E> {
    callback: Arc<dyn Fn(&E) + Send + Sync + 'static>,
}

impl<E> EventListener<E> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    pub fn call(&self, event: &E) {
        (self.callback)(event)
    }

    pub fn same_as(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }

    pub(crate) fn identity(&self) -> usize {
        Arc::as_ptr(&self.callback) as *const () as usize
    }
}

impl<E> Clone for EventListener<E> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<E> fmt::Debug for EventListener<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListener")
            .field("id", &format_args!("{:#x}", self.identity()))
            .finish()
    }
}

/// Binds a [`Channel`] to the event type its listeners receive.
pub struct ListenerKey<E> {
    channel: Channel,
    _event: PhantomData<fn(&E)>,
}

impl<E> ListenerKey<E> {
    const fn new(channel: Channel) -> Self {
        Self {
            channel,
            _event: PhantomData,
        }
    }

    pub const fn channel(&self) -> Channel {
        self.channel
    }
}

impl<E> Clone for ListenerKey<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ListenerKey<E> {}

impl<E> fmt::Debug for ListenerKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListenerKey").field(&self.channel).finish()
    }
}

/// Event types that can be extracted from a transformed [`BridgeEvent`].
pub trait ChannelEvent: 'static {
    fn from_event(event: &BridgeEvent) -> Option<&Self>;
}

pub mod keys {
    //! One key per channel.
    use super::ListenerKey;
    use crate::events::constants::Channel;
    use crate::in_app_messages::{
        InAppMessageClickEvent, InAppMessageDidDismissEvent, InAppMessageDidDisplayEvent,
        InAppMessageWillDismissEvent, InAppMessageWillDisplayEvent,
    };
    use crate::notifications::{NotificationClickEvent, NotificationWillDisplayEvent};
    use crate::user::{PushSubscriptionChangedState, UserChangedState};

    /// Receives the bare permission flag.
    pub const PERMISSION_CHANGED: ListenerKey<bool> =
        ListenerKey::new(Channel::PermissionChanged);
    pub const SUBSCRIPTION_CHANGED: ListenerKey<PushSubscriptionChangedState> =
        ListenerKey::new(Channel::SubscriptionChanged);
    pub const USER_STATE_CHANGED: ListenerKey<UserChangedState> =
        ListenerKey::new(Channel::UserStateChanged);
    pub const NOTIFICATION_WILL_DISPLAY: ListenerKey<NotificationWillDisplayEvent> =
        ListenerKey::new(Channel::NotificationWillDisplay);
    pub const NOTIFICATION_CLICKED: ListenerKey<NotificationClickEvent> =
        ListenerKey::new(Channel::NotificationClicked);
    pub const IN_APP_MESSAGE_CLICKED: ListenerKey<InAppMessageClickEvent> =
        ListenerKey::new(Channel::InAppMessageClicked);
    pub const IN_APP_MESSAGE_WILL_DISPLAY: ListenerKey<InAppMessageWillDisplayEvent> =
        ListenerKey::new(Channel::InAppMessageWillDisplay);
    pub const IN_APP_MESSAGE_DID_DISPLAY: ListenerKey<InAppMessageDidDisplayEvent> =
        ListenerKey::new(Channel::InAppMessageDidDisplay);
    pub const IN_APP_MESSAGE_WILL_DISMISS: ListenerKey<InAppMessageWillDismissEvent> =
        ListenerKey::new(Channel::InAppMessageWillDismiss);
    pub const IN_APP_MESSAGE_DID_DISMISS: ListenerKey<InAppMessageDidDismissEvent> =
        ListenerKey::new(Channel::InAppMessageDidDismiss);
}
