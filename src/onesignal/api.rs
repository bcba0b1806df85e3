use std::sync::{Arc, Mutex};

use crate::error::OneSignalResult;
use crate::events::{EventDispatcher, NativeBridgeAdapter};
use crate::in_app_messages::InAppMessages;
use crate::logger;
use crate::native::logger::LOGGER;
use crate::native::{NativeHandle, NativeModule};
use crate::notifications::Notifications;
use crate::onesignal::context::{require_non_empty, BridgeContext};
use crate::onesignal::debug::Debug;
use crate::onesignal::live_activities::LiveActivities;
use crate::onesignal::location::Location;
use crate::onesignal::options::OneSignalOptions;
use crate::onesignal::session::Session;
use crate::platform::Platform;
use crate::user::User;

/// Entry point of the bridge.
///
/// Owns one [`EventDispatcher`] fed by the native emitter and hands out the
/// feature namespaces, which all share it. Cloning is cheap.
#[derive(Clone)]
pub struct OneSignal {
    inner: Arc<OneSignalInner>,
}

struct OneSignalInner {
    context: BridgeContext,
    options: OneSignalOptions,
    adapter: Mutex<NativeBridgeAdapter>,
}

impl OneSignal {
    /// Wires the bridge to `native`. `None` yields a client whose commands are
    /// no-ops and whose queries fail with `bridge/native-module-not-loaded`.
    pub fn new(native: Option<Arc<dyn NativeModule>>, options: OneSignalOptions) -> Self {
        if let Some(level) = options.log_level {
            let _ = logger::set_log_level(level);
        }

        let handle = NativeHandle::from_option(native);
        let context = BridgeContext::new(handle.clone(), options.platform);
        let adapter = NativeBridgeAdapter::attach(handle.module(), &context.dispatcher);
        if !adapter.is_attached() {
            LOGGER.warn("OneSignal native module not loaded; native events will not be delivered");
        }

        let onesignal = Self {
            inner: Arc::new(OneSignalInner {
                context,
                options,
                adapter: Mutex::new(adapter),
            }),
        };

        if let Some(app_id) = onesignal.inner.options.app_id.clone() {
            if let Err(err) = onesignal.initialize(&app_id) {
                LOGGER.error(format!("Skipping initialization: {err}"));
            }
        }
        onesignal
    }

    /// Builds a client from [`OneSignalOptions::from_env`].
    pub fn from_env(native: Option<Arc<dyn NativeModule>>) -> OneSignalResult<Self> {
        Ok(Self::new(native, OneSignalOptions::from_env()?))
    }

    pub fn options(&self) -> &OneSignalOptions {
        &self.inner.options
    }

    pub fn platform(&self) -> Platform {
        self.inner.context.platform()
    }

    pub fn dispatcher(&self) -> &Arc<EventDispatcher> {
        &self.inner.context.dispatcher
    }

    /// Initializes the native SDK with a OneSignal app id.
    pub fn initialize(&self, app_id: &str) -> OneSignalResult<()> {
        require_non_empty(app_id, "initialize", "app id")?;
        self.native().command(|native| native.initialize(app_id));
        Ok(())
    }

    /// Switches to the user identified by `external_id`, creating it if needed.
    pub fn login(&self, external_id: &str) -> OneSignalResult<()> {
        require_non_empty(external_id, "login", "external id")?;
        self.native().command(|native| native.login(external_id));
        Ok(())
    }

    /// Detaches the external id and continues with an anonymous user.
    pub fn logout(&self) {
        self.native().command(|native| native.logout());
    }

    /// When required, no data is sent until consent is given.
    pub fn set_consent_required(&self, required: bool) {
        self.native()
            .command(|native| native.set_privacy_consent_required(required));
    }

    pub fn set_consent_given(&self, granted: bool) {
        self.native()
            .command(|native| native.set_privacy_consent_given(granted));
    }

    /// Removes every listener registered through any namespace.
    pub fn clear_handlers(&self) {
        self.dispatcher().clear();
    }

    /// Stops receiving native events. Listeners stay registered.
    pub fn detach_native_events(&self) {
        let mut adapter = self.inner.adapter.lock().unwrap();
        std::mem::replace(&mut *adapter, NativeBridgeAdapter::detached()).teardown();
    }

    pub fn native_subscription_count(&self) -> usize {
        self.inner.adapter.lock().unwrap().subscription_count()
    }

    pub fn debug(&self) -> Debug {
        Debug::new(self.context())
    }

    pub fn live_activities(&self) -> LiveActivities {
        LiveActivities::new(self.context())
    }

    pub fn user(&self) -> User {
        User::new(self.context())
    }

    pub fn notifications(&self) -> Notifications {
        Notifications::new(self.context())
    }

    pub fn in_app_messages(&self) -> InAppMessages {
        InAppMessages::new(self.context())
    }

    pub fn location(&self) -> Location {
        Location::new(self.context())
    }

    pub fn session(&self) -> Session {
        Session::new(self.context())
    }

    fn context(&self) -> BridgeContext {
        self.inner.context.clone()
    }

    fn native(&self) -> &NativeHandle {
        &self.inner.context.native
    }
}

impl std::fmt::Debug for OneSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneSignal")
            .field("platform", &self.platform())
            .field("native", &self.inner.context.native)
            .field("options", &self.inner.options)
            .finish()
    }
}
