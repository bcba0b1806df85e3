use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::OneSignalResult;
use crate::native::types::{
    EmitterSubscription, LiveActivitySetupOptions, NativeCallback, NativeLogLevel,
    RawEventCallback,
};

/// Single-channel, single-callback subscription primitive of the native boundary.
pub trait NativeEventEmitter: Send + Sync {
    /// Registers `callback` for every raw payload emitted under `event_name`.
    fn add_listener(&self, event_name: &str, callback: RawEventCallback) -> EmitterSubscription;
}

/// Command and query surface exposed by the native OneSignal SDK.
///
/// Commands are one-way calls. Queries resolve asynchronously with the native
/// answer or a [`OneSignalError`](crate::error::OneSignalError) describing why the
/// native side failed.
#[async_trait]
pub trait NativeModule: NativeEventEmitter {
    fn initialize(&self, app_id: &str);
    fn login(&self, external_id: &str);
    fn logout(&self);
    fn set_privacy_consent_required(&self, required: bool);
    fn set_privacy_consent_given(&self, granted: bool);

    fn set_log_level(&self, level: NativeLogLevel);
    fn set_alert_level(&self, level: NativeLogLevel);

    // Live activities (iOS)
    fn enter_live_activity(&self, activity_id: &str, token: &str, callback: NativeCallback);
    fn exit_live_activity(&self, activity_id: &str, callback: NativeCallback);
    fn set_push_to_start_token(&self, activity_type: &str, token: &str);
    fn remove_push_to_start_token(&self, activity_type: &str);
    fn setup_default_live_activity(&self, options: Option<&LiveActivitySetupOptions>);
    fn start_default_live_activity(&self, activity_id: &str, attributes: &Value, content: &Value);

    // Push subscription
    fn add_push_subscription_observer(&self);
    fn opt_in(&self);
    fn opt_out(&self);
    async fn get_push_subscription_id(&self) -> OneSignalResult<Option<String>>;
    async fn get_push_subscription_token(&self) -> OneSignalResult<Option<String>>;
    async fn get_opted_in(&self) -> OneSignalResult<bool>;

    // User
    fn add_user_state_observer(&self);
    fn set_language(&self, language: &str);
    fn add_alias(&self, label: &str, id: &str);
    fn add_aliases(&self, aliases: &HashMap<String, String>);
    fn remove_alias(&self, label: &str);
    fn remove_aliases(&self, labels: &[String]);
    fn add_email(&self, email: &str);
    fn remove_email(&self, email: &str);
    fn add_sms(&self, sms_number: &str);
    fn remove_sms(&self, sms_number: &str);
    fn add_tag(&self, key: &str, value: &str);
    fn add_tags(&self, tags: &HashMap<String, String>);
    fn remove_tags(&self, keys: &[String]);
    async fn get_onesignal_id(&self) -> OneSignalResult<Option<String>>;
    async fn get_external_id(&self) -> OneSignalResult<Option<String>>;
    async fn get_tags(&self) -> OneSignalResult<HashMap<String, String>>;

    // Notifications
    fn add_notification_click_listener(&self);
    fn add_notification_foreground_lifecycle_listener(&self);
    fn add_permission_observer(&self);
    fn clear_all_notifications(&self);
    fn remove_notification(&self, android_notification_id: i32);
    fn remove_grouped_notifications(&self, group_key: &str);
    fn register_for_provisional_authorization(&self, callback: NativeCallback);
    fn prevent_default(&self, notification_id: &str);
    fn complete_notification_event(&self, notification_id: &str, display: bool);
    fn display_notification(&self, notification_id: &str);
    async fn has_notification_permission(&self) -> OneSignalResult<bool>;
    async fn request_notification_permission(
        &self,
        fallback_to_settings: bool,
    ) -> OneSignalResult<bool>;
    async fn can_request_notification_permission(&self) -> OneSignalResult<bool>;
    /// Raw iOS authorization status code.
    async fn permission_native(&self) -> OneSignalResult<i32>;

    // In-app messages
    fn add_in_app_message_click_listener(&self);
    fn add_in_app_messages_lifecycle_listener(&self);
    fn add_triggers(&self, triggers: &HashMap<String, String>);
    fn remove_trigger(&self, key: &str);
    fn remove_triggers(&self, keys: &[String]);
    fn clear_triggers(&self);
    fn paused(&self, paused: bool);
    async fn get_paused(&self) -> OneSignalResult<bool>;

    // Location
    fn request_location_permission(&self);
    fn set_location_shared(&self, shared: bool);
    async fn is_location_shared(&self) -> OneSignalResult<bool>;

    // Session outcomes
    fn add_outcome(&self, name: &str);
    fn add_unique_outcome(&self, name: &str);
    fn add_outcome_with_value(&self, name: &str, value: f64);
}
