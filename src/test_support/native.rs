use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{native_call_failed, OneSignalResult};
use crate::native::{
    EmitterSubscription, LiveActivitySetupOptions, NativeCallback, NativeEventEmitter,
    NativeHandle, NativeLogLevel, NativeModule, RawEventCallback, RawPayload,
};

#[derive(Clone, Debug, PartialEq)]
pub struct NativeCall {
    pub method: &'static str,
    pub args: Vec<Value>,
}

#[derive(Default)]
struct EmitterListeners {
    next_id: u64,
    by_event: HashMap<String, Vec<(u64, RawEventCallback)>>,
}

/// In-memory native module that records every call it receives.
///
/// Queries answer with values primed through [`respond`](Self::respond) and fall
/// back to an empty answer otherwise.
#[derive(Default)]
pub struct RecordingNativeModule {
    calls: Mutex<Vec<NativeCall>>,
    responses: Mutex<HashMap<&'static str, Value>>,
    callbacks: Mutex<Vec<NativeCallback>>,
    emitter: Arc<Mutex<EmitterListeners>>,
}

impl RecordingNativeModule {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn handle(self: &Arc<Self>) -> NativeHandle {
        NativeHandle::new(Arc::clone(self) as Arc<dyn NativeModule>)
    }

    /// Primes the answer of a query; `value` must deserialize to its return type.
    pub fn respond(&self, method: &'static str, value: Value) {
        self.responses.lock().unwrap().insert(method, value);
    }

    pub fn calls(&self) -> Vec<NativeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|call| call.method).collect()
    }

    pub fn calls_to(&self, method: &str) -> Vec<Vec<Value>> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == method)
            .map(|call| call.args)
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Fires every completion callback handed to the module so far.
    pub fn complete_callbacks(&self, value: Value) -> usize {
        let callbacks = self.callbacks.lock().unwrap().clone();
        for callback in &callbacks {
            callback(value.clone());
        }
        callbacks.len()
    }

    /// Emits a raw payload under `event_name`, returning how many emitter
    /// callbacks received it.
    pub fn emit(&self, event_name: &str, payload: RawPayload) -> usize {
        let callbacks: Vec<RawEventCallback> = self
            .emitter
            .lock()
            .unwrap()
            .by_event
            .get(event_name)
            .map(|entries| entries.iter().map(|(_, cb)| Arc::clone(cb)).collect())
            .unwrap_or_default();
        for callback in &callbacks {
            callback(payload.clone());
        }
        callbacks.len()
    }

    pub fn emitter_listener_count(&self, event_name: &str) -> usize {
        self.emitter
            .lock()
            .unwrap()
            .by_event
            .get(event_name)
            .map_or(0, Vec::len)
    }

    fn record(&self, method: &'static str, args: Vec<Value>) {
        self.calls.lock().unwrap().push(NativeCall { method, args });
    }

    fn keep_callback(&self, callback: NativeCallback) {
        self.callbacks.lock().unwrap().push(callback);
    }

    fn answer<T: DeserializeOwned>(&self, method: &'static str, fallback: T) -> OneSignalResult<T> {
        self.record(method, Vec::new());
        match self.responses.lock().unwrap().get(method).cloned() {
            Some(value) => serde_json::from_value(value)
                .map_err(|err| native_call_failed(format!("{method}: {err}"))),
            None => Ok(fallback),
        }
    }
}

impl NativeEventEmitter for RecordingNativeModule {
    fn add_listener(&self, event_name: &str, callback: RawEventCallback) -> EmitterSubscription {
        let id = {
            let mut emitter = self.emitter.lock().unwrap();
            emitter.next_id += 1;
            let id = emitter.next_id;
            emitter
                .by_event
                .entry(event_name.to_string())
                .or_default()
                .push((id, callback));
            id
        };

        let emitter = Arc::clone(&self.emitter);
        let name = event_name.to_string();
        EmitterSubscription::new(event_name, move || {
            let mut emitter = emitter.lock().unwrap();
            if let Some(entries) = emitter.by_event.get_mut(&name) {
                entries.retain(|(entry_id, _)| *entry_id != id);
                if entries.is_empty() {
                    emitter.by_event.remove(&name);
                }
            }
        })
    }
}

#[async_trait]
impl NativeModule for RecordingNativeModule {
    fn initialize(&self, app_id: &str) {
        self.record("initialize", vec![json!(app_id)]);
    }

    fn login(&self, external_id: &str) {
        self.record("login", vec![json!(external_id)]);
    }

    fn logout(&self) {
        self.record("logout", Vec::new());
    }

    fn set_privacy_consent_required(&self, required: bool) {
        self.record("set_privacy_consent_required", vec![json!(required)]);
    }

    fn set_privacy_consent_given(&self, granted: bool) {
        self.record("set_privacy_consent_given", vec![json!(granted)]);
    }

    fn set_log_level(&self, level: NativeLogLevel) {
        self.record("set_log_level", vec![json!(level.as_i32())]);
    }

    fn set_alert_level(&self, level: NativeLogLevel) {
        self.record("set_alert_level", vec![json!(level.as_i32())]);
    }

    fn enter_live_activity(&self, activity_id: &str, token: &str, callback: NativeCallback) {
        self.record("enter_live_activity", vec![json!(activity_id), json!(token)]);
        self.keep_callback(callback);
    }

    fn exit_live_activity(&self, activity_id: &str, callback: NativeCallback) {
        self.record("exit_live_activity", vec![json!(activity_id)]);
        self.keep_callback(callback);
    }

    fn set_push_to_start_token(&self, activity_type: &str, token: &str) {
        self.record(
            "set_push_to_start_token",
            vec![json!(activity_type), json!(token)],
        );
    }

    fn remove_push_to_start_token(&self, activity_type: &str) {
        self.record("remove_push_to_start_token", vec![json!(activity_type)]);
    }

    fn setup_default_live_activity(&self, options: Option<&LiveActivitySetupOptions>) {
        self.record("setup_default_live_activity", vec![json!(options)]);
    }

    fn start_default_live_activity(&self, activity_id: &str, attributes: &Value, content: &Value) {
        self.record(
            "start_default_live_activity",
            vec![json!(activity_id), attributes.clone(), content.clone()],
        );
    }

    fn add_push_subscription_observer(&self) {
        self.record("add_push_subscription_observer", Vec::new());
    }

    fn opt_in(&self) {
        self.record("opt_in", Vec::new());
    }

    fn opt_out(&self) {
        self.record("opt_out", Vec::new());
    }

    async fn get_push_subscription_id(&self) -> OneSignalResult<Option<String>> {
        self.answer("get_push_subscription_id", None)
    }

    async fn get_push_subscription_token(&self) -> OneSignalResult<Option<String>> {
        self.answer("get_push_subscription_token", None)
    }

    async fn get_opted_in(&self) -> OneSignalResult<bool> {
        self.answer("get_opted_in", false)
    }

    fn add_user_state_observer(&self) {
        self.record("add_user_state_observer", Vec::new());
    }

    fn set_language(&self, language: &str) {
        self.record("set_language", vec![json!(language)]);
    }

    fn add_alias(&self, label: &str, id: &str) {
        self.record("add_alias", vec![json!(label), json!(id)]);
    }

    fn add_aliases(&self, aliases: &HashMap<String, String>) {
        self.record("add_aliases", vec![json!(aliases)]);
    }

    fn remove_alias(&self, label: &str) {
        self.record("remove_alias", vec![json!(label)]);
    }

    fn remove_aliases(&self, labels: &[String]) {
        self.record("remove_aliases", vec![json!(labels)]);
    }

    fn add_email(&self, email: &str) {
        self.record("add_email", vec![json!(email)]);
    }

    fn remove_email(&self, email: &str) {
        self.record("remove_email", vec![json!(email)]);
    }

    fn add_sms(&self, sms_number: &str) {
        self.record("add_sms", vec![json!(sms_number)]);
    }

    fn remove_sms(&self, sms_number: &str) {
        self.record("remove_sms", vec![json!(sms_number)]);
    }

    fn add_tag(&self, key: &str, value: &str) {
        self.record("add_tag", vec![json!(key), json!(value)]);
    }

    fn add_tags(&self, tags: &HashMap<String, String>) {
        self.record("add_tags", vec![json!(tags)]);
    }

    fn remove_tags(&self, keys: &[String]) {
        self.record("remove_tags", vec![json!(keys)]);
    }

    async fn get_onesignal_id(&self) -> OneSignalResult<Option<String>> {
        self.answer("get_onesignal_id", None)
    }

    async fn get_external_id(&self) -> OneSignalResult<Option<String>> {
        self.answer("get_external_id", None)
    }

    async fn get_tags(&self) -> OneSignalResult<HashMap<String, String>> {
        self.answer("get_tags", HashMap::new())
    }

    fn add_notification_click_listener(&self) {
        self.record("add_notification_click_listener", Vec::new());
    }

    fn add_notification_foreground_lifecycle_listener(&self) {
        self.record("add_notification_foreground_lifecycle_listener", Vec::new());
    }

    fn add_permission_observer(&self) {
        self.record("add_permission_observer", Vec::new());
    }

    fn clear_all_notifications(&self) {
        self.record("clear_all_notifications", Vec::new());
    }

    fn remove_notification(&self, android_notification_id: i32) {
        self.record("remove_notification", vec![json!(android_notification_id)]);
    }

    fn remove_grouped_notifications(&self, group_key: &str) {
        self.record("remove_grouped_notifications", vec![json!(group_key)]);
    }

    fn register_for_provisional_authorization(&self, callback: NativeCallback) {
        self.record("register_for_provisional_authorization", Vec::new());
        self.keep_callback(callback);
    }

    fn prevent_default(&self, notification_id: &str) {
        self.record("prevent_default", vec![json!(notification_id)]);
    }

    fn complete_notification_event(&self, notification_id: &str, display: bool) {
        self.record(
            "complete_notification_event",
            vec![json!(notification_id), json!(display)],
        );
    }

    fn display_notification(&self, notification_id: &str) {
        self.record("display_notification", vec![json!(notification_id)]);
    }

    async fn has_notification_permission(&self) -> OneSignalResult<bool> {
        self.answer("has_notification_permission", false)
    }

    async fn request_notification_permission(
        &self,
        fallback_to_settings: bool,
    ) -> OneSignalResult<bool> {
        let granted = self.answer("request_notification_permission", false)?;
        if let Some(call) = self.calls.lock().unwrap().last_mut() {
            call.args.push(json!(fallback_to_settings));
        }
        Ok(granted)
    }

    async fn can_request_notification_permission(&self) -> OneSignalResult<bool> {
        self.answer("can_request_notification_permission", false)
    }

    async fn permission_native(&self) -> OneSignalResult<i32> {
        self.answer("permission_native", 0)
    }

    fn add_in_app_message_click_listener(&self) {
        self.record("add_in_app_message_click_listener", Vec::new());
    }

    fn add_in_app_messages_lifecycle_listener(&self) {
        self.record("add_in_app_messages_lifecycle_listener", Vec::new());
    }

    fn add_triggers(&self, triggers: &HashMap<String, String>) {
        self.record("add_triggers", vec![json!(triggers)]);
    }

    fn remove_trigger(&self, key: &str) {
        self.record("remove_trigger", vec![json!(key)]);
    }

    fn remove_triggers(&self, keys: &[String]) {
        self.record("remove_triggers", vec![json!(keys)]);
    }

    fn clear_triggers(&self) {
        self.record("clear_triggers", Vec::new());
    }

    fn paused(&self, paused: bool) {
        self.record("paused", vec![json!(paused)]);
    }

    async fn get_paused(&self) -> OneSignalResult<bool> {
        self.answer("get_paused", false)
    }

    fn request_location_permission(&self) {
        self.record("request_location_permission", Vec::new());
    }

    fn set_location_shared(&self, shared: bool) {
        self.record("set_location_shared", vec![json!(shared)]);
    }

    async fn is_location_shared(&self) -> OneSignalResult<bool> {
        self.answer("is_location_shared", false)
    }

    fn add_outcome(&self, name: &str) {
        self.record("add_outcome", vec![json!(name)]);
    }

    fn add_unique_outcome(&self, name: &str) {
        self.record("add_unique_outcome", vec![json!(name)]);
    }

    fn add_outcome_with_value(&self, name: &str, value: f64) {
        self.record("add_outcome_with_value", vec![json!(name), json!(value)]);
    }
}
