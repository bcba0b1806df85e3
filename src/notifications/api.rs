use crate::error::OneSignalResult;
use crate::events::{keys, EventListener};
use crate::native::{NativeCallback, NotificationPermission};
use crate::notifications::{NotificationClickEvent, NotificationWillDisplayEvent};
use crate::onesignal::context::{require_non_empty, BridgeContext};
use crate::platform::Platform;

/// Push notification permission, display and listener controls.
#[derive(Clone, Debug)]
pub struct Notifications {
    context: BridgeContext,
}

impl Notifications {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    /// Whether the app may currently display notifications.
    pub async fn get_permission(&self) -> OneSignalResult<bool> {
        self.context.native.query()?.has_notification_permission().await
    }

    /// Prompts the user for permission. With `fallback_to_settings` a denied
    /// user is sent to the system settings instead.
    pub async fn request_permission(&self, fallback_to_settings: bool) -> OneSignalResult<bool> {
        self.context
            .native
            .query()?
            .request_notification_permission(fallback_to_settings)
            .await
    }

    pub async fn can_request_permission(&self) -> OneSignalResult<bool> {
        self.context
            .native
            .query()?
            .can_request_notification_permission()
            .await
    }

    /// The platform's own authorization status.
    pub async fn permission_native(&self) -> OneSignalResult<NotificationPermission> {
        let status = self.context.native.query()?.permission_native().await?;
        NotificationPermission::try_from(status)
    }

    /// Requests provisional (quiet) authorization. iOS only.
    pub fn register_for_provisional_authorization(
        &self,
        handler: NativeCallback,
    ) -> OneSignalResult<()> {
        self.context
            .require_platform(Platform::Ios, "registerForProvisionalAuthorization")?;
        self.context
            .native
            .command(|native| native.register_for_provisional_authorization(handler));
        Ok(())
    }

    /// Removes every OneSignal notification from the notification shade.
    pub fn clear_all(&self) {
        self.context
            .native
            .command(|native| native.clear_all_notifications());
    }

    /// Cancels one notification by its Android notification id. Android only.
    pub fn remove_notification(&self, android_notification_id: i32) -> OneSignalResult<()> {
        self.context
            .require_platform(Platform::Android, "removeNotification")?;
        self.context
            .native
            .command(|native| native.remove_notification(android_notification_id));
        Ok(())
    }

    /// Cancels a whole notification group. Android only.
    pub fn remove_grouped_notifications(&self, group_key: &str) -> OneSignalResult<()> {
        self.context
            .require_platform(Platform::Android, "removeGroupedNotifications")?;
        require_non_empty(group_key, "removeGroupedNotifications", "group key")?;
        self.context
            .native
            .command(|native| native.remove_grouped_notifications(group_key));
        Ok(())
    }

    pub fn add_click_listener(&self, listener: &EventListener<NotificationClickEvent>) {
        self.context
            .subscribe(keys::NOTIFICATION_CLICKED, listener, |native| {
                native.add_notification_click_listener()
            });
    }

    pub fn remove_click_listener(&self, listener: &EventListener<NotificationClickEvent>) {
        self.context.unsubscribe(keys::NOTIFICATION_CLICKED, listener);
    }

    /// Called before a notification is shown while the app is in the foreground.
    pub fn add_foreground_will_display_listener(
        &self,
        listener: &EventListener<NotificationWillDisplayEvent>,
    ) {
        self.context
            .subscribe(keys::NOTIFICATION_WILL_DISPLAY, listener, |native| {
                native.add_notification_foreground_lifecycle_listener()
            });
    }

    pub fn remove_foreground_will_display_listener(
        &self,
        listener: &EventListener<NotificationWillDisplayEvent>,
    ) {
        self.context
            .unsubscribe(keys::NOTIFICATION_WILL_DISPLAY, listener);
    }

    /// Listener receives `true` once permission is granted and `false` once revoked.
    pub fn add_permission_change_listener(&self, listener: &EventListener<bool>) {
        self.context
            .subscribe(keys::PERMISSION_CHANGED, listener, |native| {
                native.add_permission_observer()
            });
    }

    pub fn remove_permission_change_listener(&self, listener: &EventListener<bool>) {
        self.context.unsubscribe(keys::PERMISSION_CHANGED, listener);
    }
}
