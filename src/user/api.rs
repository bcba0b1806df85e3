use std::collections::HashMap;

use crate::error::OneSignalResult;
use crate::events::{keys, EventListener};
use crate::onesignal::context::{collect_keys, require_entries, require_non_empty, BridgeContext};
use crate::user::{PushSubscription, UserChangedState};

/// Identity, aliases, channels and tags of the current OneSignal user.
#[derive(Clone, Debug)]
pub struct User {
    context: BridgeContext,
    push_subscription: PushSubscription,
}

impl User {
    pub(crate) fn new(context: BridgeContext) -> Self {
        let push_subscription = PushSubscription::new(context.clone());
        Self {
            context,
            push_subscription,
        }
    }

    pub fn push_subscription(&self) -> &PushSubscription {
        &self.push_subscription
    }

    pub async fn get_onesignal_id(&self) -> OneSignalResult<Option<String>> {
        self.context.native.query()?.get_onesignal_id().await
    }

    pub async fn get_external_id(&self) -> OneSignalResult<Option<String>> {
        self.context.native.query()?.get_external_id().await
    }

    pub async fn get_tags(&self) -> OneSignalResult<HashMap<String, String>> {
        self.context.native.query()?.get_tags().await
    }

    pub fn add_change_listener(&self, listener: &EventListener<UserChangedState>) {
        self.context
            .subscribe(keys::USER_STATE_CHANGED, listener, |native| {
                native.add_user_state_observer()
            });
    }

    pub fn remove_change_listener(&self, listener: &EventListener<UserChangedState>) {
        self.context.unsubscribe(keys::USER_STATE_CHANGED, listener);
    }

    /// Sets the user's language as an ISO 639-1 code.
    pub fn set_language(&self, language: &str) -> OneSignalResult<()> {
        require_non_empty(language, "setLanguage", "language")?;
        self.context
            .native
            .command(|native| native.set_language(language));
        Ok(())
    }

    pub fn add_alias(&self, label: &str, id: &str) -> OneSignalResult<()> {
        require_non_empty(label, "addAlias", "label")?;
        require_non_empty(id, "addAlias", "id")?;
        self.context
            .native
            .command(|native| native.add_alias(label, id));
        Ok(())
    }

    pub fn add_aliases(&self, aliases: &HashMap<String, String>) -> OneSignalResult<()> {
        require_entries(aliases, "addAliases")?;
        self.context
            .native
            .command(|native| native.add_aliases(aliases));
        Ok(())
    }

    pub fn remove_alias(&self, label: &str) -> OneSignalResult<()> {
        require_non_empty(label, "removeAlias", "label")?;
        self.context
            .native
            .command(|native| native.remove_alias(label));
        Ok(())
    }

    pub fn remove_aliases<I>(&self, labels: I) -> OneSignalResult<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let labels = collect_keys(labels, "removeAliases")?;
        self.context
            .native
            .command(|native| native.remove_aliases(&labels));
        Ok(())
    }

    pub fn add_email(&self, email: &str) -> OneSignalResult<()> {
        require_non_empty(email, "addEmail", "email")?;
        self.context.native.command(|native| native.add_email(email));
        Ok(())
    }

    pub fn remove_email(&self, email: &str) -> OneSignalResult<()> {
        require_non_empty(email, "removeEmail", "email")?;
        self.context
            .native
            .command(|native| native.remove_email(email));
        Ok(())
    }

    pub fn add_sms(&self, sms_number: &str) -> OneSignalResult<()> {
        require_non_empty(sms_number, "addSms", "SMS number")?;
        self.context
            .native
            .command(|native| native.add_sms(sms_number));
        Ok(())
    }

    pub fn remove_sms(&self, sms_number: &str) -> OneSignalResult<()> {
        require_non_empty(sms_number, "removeSms", "SMS number")?;
        self.context
            .native
            .command(|native| native.remove_sms(sms_number));
        Ok(())
    }

    pub fn add_tag(&self, key: &str, value: &str) -> OneSignalResult<()> {
        require_non_empty(key, "addTag", "tag key")?;
        self.context
            .native
            .command(|native| native.add_tag(key, value));
        Ok(())
    }

    pub fn add_tags(&self, tags: &HashMap<String, String>) -> OneSignalResult<()> {
        require_entries(tags, "addTags")?;
        self.context.native.command(|native| native.add_tags(tags));
        Ok(())
    }

    pub fn remove_tag(&self, key: &str) -> OneSignalResult<()> {
        self.remove_tags([key])
    }

    pub fn remove_tags<I>(&self, keys: I) -> OneSignalResult<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let keys = collect_keys(keys, "removeTags")?;
        self.context
            .native
            .command(|native| native.remove_tags(&keys));
        Ok(())
    }
}
