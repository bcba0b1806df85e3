use std::collections::HashMap;

use crate::error::OneSignalResult;
use crate::events::{keys, EventListener};
use crate::in_app_messages::{
    InAppMessageClickEvent, InAppMessageDidDismissEvent, InAppMessageDidDisplayEvent,
    InAppMessageWillDismissEvent, InAppMessageWillDisplayEvent,
};
use crate::onesignal::context::{collect_keys, require_entries, require_non_empty, BridgeContext};

/// Triggers, pausing and lifecycle listeners for in-app messages.
#[derive(Clone, Debug)]
pub struct InAppMessages {
    context: BridgeContext,
}

impl InAppMessages {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    pub fn add_click_listener(&self, listener: &EventListener<InAppMessageClickEvent>) {
        self.context
            .subscribe(keys::IN_APP_MESSAGE_CLICKED, listener, |native| {
                native.add_in_app_message_click_listener()
            });
    }

    pub fn remove_click_listener(&self, listener: &EventListener<InAppMessageClickEvent>) {
        self.context
            .unsubscribe(keys::IN_APP_MESSAGE_CLICKED, listener);
    }

    pub fn add_will_display_listener(
        &self,
        listener: &EventListener<InAppMessageWillDisplayEvent>,
    ) {
        self.context
            .subscribe(keys::IN_APP_MESSAGE_WILL_DISPLAY, listener, |native| {
                native.add_in_app_messages_lifecycle_listener()
            });
    }

    pub fn remove_will_display_listener(
        &self,
        listener: &EventListener<InAppMessageWillDisplayEvent>,
    ) {
        self.context
            .unsubscribe(keys::IN_APP_MESSAGE_WILL_DISPLAY, listener);
    }

    pub fn add_did_display_listener(&self, listener: &EventListener<InAppMessageDidDisplayEvent>) {
        self.context
            .subscribe(keys::IN_APP_MESSAGE_DID_DISPLAY, listener, |native| {
                native.add_in_app_messages_lifecycle_listener()
            });
    }

    pub fn remove_did_display_listener(
        &self,
        listener: &EventListener<InAppMessageDidDisplayEvent>,
    ) {
        self.context
            .unsubscribe(keys::IN_APP_MESSAGE_DID_DISPLAY, listener);
    }

    pub fn add_will_dismiss_listener(
        &self,
        listener: &EventListener<InAppMessageWillDismissEvent>,
    ) {
        self.context
            .subscribe(keys::IN_APP_MESSAGE_WILL_DISMISS, listener, |native| {
                native.add_in_app_messages_lifecycle_listener()
            });
    }

    pub fn remove_will_dismiss_listener(
        &self,
        listener: &EventListener<InAppMessageWillDismissEvent>,
    ) {
        self.context
            .unsubscribe(keys::IN_APP_MESSAGE_WILL_DISMISS, listener);
    }

    pub fn add_did_dismiss_listener(&self, listener: &EventListener<InAppMessageDidDismissEvent>) {
        self.context
            .subscribe(keys::IN_APP_MESSAGE_DID_DISMISS, listener, |native| {
                native.add_in_app_messages_lifecycle_listener()
            });
    }

    pub fn remove_did_dismiss_listener(
        &self,
        listener: &EventListener<InAppMessageDidDismissEvent>,
    ) {
        self.context
            .unsubscribe(keys::IN_APP_MESSAGE_DID_DISMISS, listener);
    }

    /// Adds one trigger that in-app messages can be targeted on.
    pub fn add_trigger(&self, key: &str, value: &str) -> OneSignalResult<()> {
        require_non_empty(key, "addTrigger", "trigger key")?;
        let triggers = HashMap::from([(key.to_string(), value.to_string())]);
        self.context
            .native
            .command(|native| native.add_triggers(&triggers));
        Ok(())
    }

    /// Adds several triggers at once; keys that already exist are overwritten.
    pub fn add_triggers(&self, triggers: &HashMap<String, String>) -> OneSignalResult<()> {
        require_entries(triggers, "addTriggers")?;
        self.context
            .native
            .command(|native| native.add_triggers(triggers));
        Ok(())
    }

    pub fn remove_trigger(&self, key: &str) -> OneSignalResult<()> {
        require_non_empty(key, "removeTrigger", "trigger key")?;
        self.context
            .native
            .command(|native| native.remove_trigger(key));
        Ok(())
    }

    pub fn remove_triggers<I>(&self, keys: I) -> OneSignalResult<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let keys = collect_keys(keys, "removeTriggers")?;
        self.context
            .native
            .command(|native| native.remove_triggers(&keys));
        Ok(())
    }

    pub fn clear_triggers(&self) {
        self.context.native.command(|native| native.clear_triggers());
    }

    /// Pauses (or resumes) the display of in-app messages.
    pub fn set_paused(&self, paused: bool) {
        self.context.native.command(|native| native.paused(paused));
    }

    pub async fn get_paused(&self) -> OneSignalResult<bool> {
        self.context.native.query()?.get_paused().await
    }
}
