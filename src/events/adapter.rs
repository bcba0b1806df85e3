use std::fmt;
use std::sync::Arc;

use crate::events::constants::Channel;
use crate::events::dispatcher::EventDispatcher;
use crate::native::{EmitterSubscription, NativeEventEmitter, RawEventCallback};

/// Native emitter subscriptions feeding one [`EventDispatcher`].
///
/// Dropping the adapter removes every subscription it made.
pub struct NativeBridgeAdapter {
    subscriptions: Vec<(Channel, EmitterSubscription)>,
}

impl NativeBridgeAdapter {
    /// Subscribes once to every channel of the catalog.
    ///
    /// Without an emitter nothing is registered and the dispatcher will simply
    /// never receive native events.
    pub fn attach<E>(emitter: Option<&E>, dispatcher: &Arc<EventDispatcher>) -> Self
    where
        E: NativeEventEmitter + ?Sized,
    {
        let Some(emitter) = emitter else {
            log::debug!("no native emitter; event channels left unsubscribed");
            return Self::detached();
        };

        let subscriptions = Channel::ALL
            .into_iter()
            .map(|channel| {
                let dispatcher = Arc::downgrade(dispatcher);
                let callback: RawEventCallback = Arc::new(move |raw| {
                    if let Some(dispatcher) = dispatcher.upgrade() {
                        dispatcher.dispatch(channel, raw);
                    }
                });
                (channel, emitter.add_listener(channel.as_str(), callback))
            })
            .collect::<Vec<_>>();
        log::debug!("subscribed to {} native channels", subscriptions.len());

        Self { subscriptions }
    }

    pub fn detached() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.subscriptions.iter().map(|(channel, _)| *channel)
    }

    pub fn teardown(mut self) {
        self.remove_all();
    }

    fn remove_all(&mut self) {
        for (_, subscription) in self.subscriptions.drain(..) {
            subscription.remove();
        }
    }
}

impl Drop for NativeBridgeAdapter {
    fn drop(&mut self) {
        self.remove_all();
    }
}

impl fmt::Debug for NativeBridgeAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.channels()).finish()
    }
}
