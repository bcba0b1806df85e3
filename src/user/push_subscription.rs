use crate::error::OneSignalResult;
use crate::events::{keys, EventListener};
use crate::onesignal::context::BridgeContext;
use crate::user::PushSubscriptionChangedState;

/// The device's push subscription.
#[derive(Clone, Debug)]
pub struct PushSubscription {
    context: BridgeContext,
}

impl PushSubscription {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    /// Subscription id, once the native SDK has registered the device.
    pub async fn get_id(&self) -> OneSignalResult<Option<String>> {
        self.context.native.query()?.get_push_subscription_id().await
    }

    pub async fn get_token(&self) -> OneSignalResult<Option<String>> {
        self.context
            .native
            .query()?
            .get_push_subscription_token()
            .await
    }

    pub async fn get_opted_in(&self) -> OneSignalResult<bool> {
        self.context.native.query()?.get_opted_in().await
    }

    pub fn opt_in(&self) {
        self.context.native.command(|native| native.opt_in());
    }

    pub fn opt_out(&self) {
        self.context.native.command(|native| native.opt_out());
    }

    pub fn add_change_listener(&self, listener: &EventListener<PushSubscriptionChangedState>) {
        self.context
            .subscribe(keys::SUBSCRIPTION_CHANGED, listener, |native| {
                native.add_push_subscription_observer()
            });
    }

    pub fn remove_change_listener(&self, listener: &EventListener<PushSubscriptionChangedState>) {
        self.context.unsubscribe(keys::SUBSCRIPTION_CHANGED, listener);
    }
}
