use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, RwLock};

use crate::events::constants::Channel;
use crate::events::listener::{ChannelEvent, EventListener, ListenerKey};
use crate::events::logger::LOGGER;
use crate::events::transform::{transform, BridgeEvent, TransformContext};
use crate::native::{NativeHandle, RawPayload};
use crate::platform::Platform;

type ErasedListener = Arc<dyn Fn(&BridgeEvent) + Send + Sync + 'static>;

#[derive(Clone)]
struct ListenerEntry {
    id: usize,
    invoke: ErasedListener,
}

/// A listener that panicked while handling an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerFailure {
    pub channel: Channel,
    pub message: String,
}

pub type ListenerErrorHook = Arc<dyn Fn(&ListenerFailure) + Send + Sync + 'static>;

/// Per-channel listener registry.
///
/// Listeners run in registration order. Each dispatch works on a snapshot, so a
/// listener that adds or removes listeners only affects later dispatches.
pub struct EventDispatcher {
    listeners: Mutex<HashMap<Channel, Vec<ListenerEntry>>>,
    context: TransformContext,
    error_hook: RwLock<Option<ListenerErrorHook>>,
}

impl EventDispatcher {
    pub fn new(platform: Platform, native: NativeHandle) -> Self {
        Self {
            listeners: Mutex::new(HashMap::new()),
            context: TransformContext { platform, native },
            error_hook: RwLock::new(None),
        }
    }

    pub fn platform(&self) -> Platform {
        self.context.platform
    }

    /// Appends `listener` to the key's channel. Adding the same listener twice
    /// makes it run twice per event.
    pub fn add_listener<E>(&self, key: ListenerKey<E>, listener: &EventListener<E>)
    where
        E: ChannelEvent,
    {
        let typed = listener.clone();
        let entry = ListenerEntry {
            id: listener.identity(),
            invoke: Arc::new(move |event: &BridgeEvent| {
                if let Some(payload) = E::from_event(event) {
                    typed.call(payload);
                }
            }),
        };

        let mut listeners = self.listeners.lock().unwrap();
        listeners.entry(key.channel()).or_default().push(entry);
        log::debug!("listener added to {}", key.channel());
    }

    /// Removes the first registration of `listener`; unknown listeners are ignored.
    pub fn remove_listener<E>(&self, key: ListenerKey<E>, listener: &EventListener<E>) {
        let channel = key.channel();
        let id = listener.identity();
        let mut listeners = self.listeners.lock().unwrap();
        let Some(entries) = listeners.get_mut(&channel) else {
            return;
        };
        if let Some(index) = entries.iter().position(|entry| entry.id == id) {
            entries.remove(index);
            log::debug!("listener removed from {channel}");
        }
        if entries.is_empty() {
            listeners.remove(&channel);
        }
    }

    pub fn listener_count(&self, channel: Channel) -> usize {
        self.listeners
            .lock()
            .unwrap()
            .get(&channel)
            .map_or(0, Vec::len)
    }

    pub fn has_listeners(&self, channel: Channel) -> bool {
        self.listener_count(channel) > 0
    }

    /// Drops every listener on every channel.
    pub fn clear(&self) {
        self.listeners.lock().unwrap().clear();
    }

    /// Replaces the sink for listener panics. `None` restores the error log.
    pub fn set_error_hook(&self, hook: Option<ListenerErrorHook>) {
        *self.error_hook.write().unwrap() = hook;
    }

    /// Routes a payload that arrived under a native event name.
    ///
    /// Names outside the catalog are ignored.
    pub fn dispatch_event_name(&self, event_name: &str, raw: RawPayload) -> usize {
        match Channel::from_event_name(event_name) {
            Some(channel) => self.dispatch(channel, raw),
            None => {
                log::debug!("ignoring unknown native event {event_name}");
                0
            }
        }
    }

    /// Transforms `raw` once and hands it to every listener registered when the
    /// event arrived. Returns how many listeners were invoked.
    pub(crate) fn dispatch(&self, channel: Channel, raw: RawPayload) -> usize {
        let snapshot = {
            let listeners = self.listeners.lock().unwrap();
            match listeners.get(&channel) {
                Some(entries) if !entries.is_empty() => entries.clone(),
                _ => return 0,
            }
        };

        let event = match transform(channel, raw, &self.context) {
            Ok(event) => event,
            Err(err) => {
                LOGGER.error(format!("Dropping {channel} event: {err}"));
                return 0;
            }
        };

        for entry in &snapshot {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| (entry.invoke)(&event)));
            if let Err(payload) = outcome {
                self.report(ListenerFailure {
                    channel,
                    message: panic_message(payload.as_ref()),
                });
            }
        }
        log::debug!("delivered {channel} to {} listener(s)", snapshot.len());
        snapshot.len()
    }

    fn report(&self, failure: ListenerFailure) {
        let hook = self.error_hook.read().unwrap().clone();
        if let Some(hook) = hook {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| hook(&failure)));
            match outcome {
                Ok(()) => return,
                Err(payload) => LOGGER.error(format!(
                    "Listener error hook panicked: {}",
                    panic_message(payload.as_ref())
                )),
            }
        }
        LOGGER.error(format!(
            "Listener for {} panicked: {}",
            failure.channel, failure.message
        ));
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.lock().unwrap();
        let counts: HashMap<_, _> = listeners
            .iter()
            .map(|(channel, entries)| (*channel, entries.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("platform", &self.context.platform)
            .field("listeners", &counts)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::keys;
    use crate::in_app_messages::InAppMessageClickEvent;
    use crate::logger::TEST_GUARD;
    use crate::notifications::NotificationClickEvent;
    use crate::user::UserChangedState;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dispatcher() -> Arc<EventDispatcher> {
        Arc::new(EventDispatcher::new(Platform::Ios, NativeHandle::unloaded()))
    }

    fn recorder<E: 'static>(
        log: &Arc<Mutex<Vec<String>>>,
        label: &'static str,
    ) -> EventListener<E> {
        let log = Arc::clone(log);
        EventListener::new(move |_: &E| log.lock().unwrap().push(label.to_string()))
    }

    fn capture_events_log<T>(run: impl FnOnce() -> T) -> (T, Vec<String>) {
        let _guard = TEST_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let records = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&records);
        LOGGER.set_log_handler(move |_, _, message| {
            sink.lock().unwrap().push(message.to_owned());
        });
        let result = run();
        LOGGER.reset_log_handler();
        let records = records.lock().unwrap().clone();
        (result, records)
    }

    fn permission(granted: bool) -> RawPayload {
        json!({ "permission": granted })
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        let first = recorder::<bool>(&log, "first");
        let second = recorder::<bool>(&log, "second");
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &first);
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &second);

        let invoked = dispatcher.dispatch(Channel::PermissionChanged, permission(true));

        assert_eq!(invoked, 2);
        assert_eq!(*log.lock().unwrap(), ["first", "second"]);
    }

    #[test]
    fn permission_listener_receives_bare_flag() {
        let dispatcher = dispatcher();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener =
            EventListener::new(move |granted: &bool| sink.lock().unwrap().push(*granted));
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &listener);

        dispatcher.dispatch(Channel::PermissionChanged, permission(true));
        dispatcher.dispatch(Channel::PermissionChanged, permission(false));

        assert_eq!(*seen.lock().unwrap(), [true, false]);
    }

    #[test]
    fn remove_drops_only_first_registration() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        let listener = recorder::<bool>(&log, "dup");
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &listener);
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &listener);

        assert_eq!(dispatcher.dispatch(Channel::PermissionChanged, permission(true)), 2);

        dispatcher.remove_listener(keys::PERMISSION_CHANGED, &listener);
        assert_eq!(dispatcher.listener_count(Channel::PermissionChanged), 1);

        dispatcher.remove_listener(keys::PERMISSION_CHANGED, &listener.clone());
        assert!(!dispatcher.has_listeners(Channel::PermissionChanged));
        assert_eq!(dispatcher.dispatch(Channel::PermissionChanged, permission(true)), 0);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn removing_unknown_listener_is_a_no_op() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        let registered = recorder::<bool>(&log, "registered");
        let stranger = EventListener::new(|_: &bool| {});
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &registered);

        dispatcher.remove_listener(keys::PERMISSION_CHANGED, &stranger);
        let unrelated = EventListener::new(|_: &UserChangedState| {});
        dispatcher.remove_listener(keys::USER_STATE_CHANGED, &unrelated);

        assert_eq!(dispatcher.listener_count(Channel::PermissionChanged), 1);
    }

    #[test]
    fn dispatch_without_listeners_skips_transform() {
        let dispatcher = dispatcher();

        // Malformed on purpose: nothing should even try to decode it.
        let (invoked, records) =
            capture_events_log(|| dispatcher.dispatch(Channel::NotificationClicked, json!(42)));

        assert_eq!(invoked, 0);
        assert!(
            !records.iter().any(|message| message.starts_with("Dropping")),
            "unexpected records: {records:?}"
        );
    }

    #[test]
    fn malformed_payload_with_listener_is_logged() {
        let dispatcher = dispatcher();
        let listener = EventListener::new(|_: &NotificationClickEvent| {});
        dispatcher.add_listener(keys::NOTIFICATION_CLICKED, &listener);

        let (invoked, records) =
            capture_events_log(|| dispatcher.dispatch(Channel::NotificationClicked, json!(42)));

        assert_eq!(invoked, 0);
        assert!(records
            .iter()
            .any(|message| message.starts_with("Dropping OneSignal-notificationClicked event")));
    }

    #[test]
    fn listener_added_during_dispatch_waits_for_next_event() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        let late = recorder::<bool>(&log, "late");

        let weak = Arc::downgrade(&dispatcher);
        let adder_log = Arc::clone(&log);
        let adder = EventListener::new(move |_: &bool| {
            adder_log.lock().unwrap().push("adder".to_string());
            if let Some(dispatcher) = weak.upgrade() {
                dispatcher.add_listener(keys::PERMISSION_CHANGED, &late);
            }
        });
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &adder);

        assert_eq!(dispatcher.dispatch(Channel::PermissionChanged, permission(true)), 1);
        assert_eq!(*log.lock().unwrap(), ["adder"]);

        log.lock().unwrap().clear();
        assert_eq!(dispatcher.dispatch(Channel::PermissionChanged, permission(true)), 2);
        assert_eq!(*log.lock().unwrap(), ["adder", "late"]);
    }

    #[test]
    fn listener_removed_during_dispatch_still_sees_current_event() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        let victim = recorder::<bool>(&log, "victim");

        let weak = Arc::downgrade(&dispatcher);
        let victim_handle = victim.clone();
        let remover = EventListener::new(move |_: &bool| {
            if let Some(dispatcher) = weak.upgrade() {
                dispatcher.remove_listener(keys::PERMISSION_CHANGED, &victim_handle);
            }
        });
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &remover);
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &victim);

        assert_eq!(dispatcher.dispatch(Channel::PermissionChanged, permission(true)), 2);
        assert_eq!(*log.lock().unwrap(), ["victim"]);
        assert_eq!(dispatcher.dispatch(Channel::PermissionChanged, permission(true)), 1);
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn panicking_listener_does_not_stop_the_pass() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&failures);
        dispatcher.set_error_hook(Some(Arc::new(move |failure: &ListenerFailure| {
            sink.lock().unwrap().push(failure.clone());
        })));

        let faulty = EventListener::new(|_: &bool| panic!("listener exploded"));
        let after = recorder::<bool>(&log, "after");
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &faulty);
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &after);

        assert_eq!(dispatcher.dispatch(Channel::PermissionChanged, permission(true)), 2);
        assert_eq!(*log.lock().unwrap(), ["after"]);
        assert_eq!(
            *failures.lock().unwrap(),
            [ListenerFailure {
                channel: Channel::PermissionChanged,
                message: "listener exploded".to_string(),
            }]
        );
    }

    #[test]
    fn panicking_error_hook_does_not_stop_the_pass() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        dispatcher.set_error_hook(Some(Arc::new(|_: &ListenerFailure| panic!("hook boom"))));

        let faulty = EventListener::new(|_: &bool| panic!("listener exploded"));
        let after = recorder::<bool>(&log, "after");
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &faulty);
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &after);

        let (invoked, records) =
            capture_events_log(|| dispatcher.dispatch(Channel::PermissionChanged, permission(true)));

        assert_eq!(invoked, 2);
        assert_eq!(*log.lock().unwrap(), ["after"]);
        assert!(records.contains(&"Listener error hook panicked: hook boom".to_string()));
        assert!(records.contains(
            &"Listener for OneSignal-permissionChanged panicked: listener exploded".to_string()
        ));
    }

    #[test]
    fn malformed_payload_reaches_nobody() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        let listener = recorder::<InAppMessageClickEvent>(&log, "click");
        dispatcher.add_listener(keys::IN_APP_MESSAGE_CLICKED, &listener);

        assert_eq!(
            dispatcher.dispatch(Channel::InAppMessageClicked, json!({ "result": {} })),
            0
        );
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn channels_are_isolated() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        let listener = recorder::<bool>(&log, "permission");
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &listener);

        let invoked = dispatcher.dispatch(
            Channel::InAppMessageDidDisplay,
            json!({ "message": { "messageId": "m" } }),
        );

        assert_eq!(invoked, 0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn event_names_route_to_channels() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        let listener = recorder::<bool>(&log, "permission");
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &listener);

        assert_eq!(
            dispatcher.dispatch_event_name("OneSignal-permissionChanged", permission(false)),
            1
        );
        assert_eq!(
            dispatcher.dispatch_event_name("OneSignal-somethingElse", permission(false)),
            0
        );
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let dispatcher = dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        dispatcher.add_listener(keys::PERMISSION_CHANGED, &recorder::<bool>(&log, "a"));
        dispatcher.add_listener(
            keys::IN_APP_MESSAGE_CLICKED,
            &recorder::<InAppMessageClickEvent>(&log, "b"),
        );

        dispatcher.clear();

        for channel in Channel::ALL {
            assert!(!dispatcher.has_listeners(channel));
        }
    }
}
