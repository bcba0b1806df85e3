use serde_json::Value;

use crate::error::OneSignalResult;
use crate::native::{LiveActivitySetupOptions, NativeCallback};
use crate::onesignal::context::{reject, require_non_empty, BridgeContext};
use crate::platform::Platform;

/// iOS Live Activities. Every operation is refused on Android.
#[derive(Clone, Debug)]
pub struct LiveActivities {
    context: BridgeContext,
}

impl LiveActivities {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    /// Associates the activity with the push token the app received for it.
    pub fn enter(
        &self,
        activity_id: &str,
        token: &str,
        handler: Option<NativeCallback>,
    ) -> OneSignalResult<()> {
        self.context.require_platform(Platform::Ios, "enterLiveActivity")?;
        require_non_empty(activity_id, "enterLiveActivity", "activity id")?;
        require_non_empty(token, "enterLiveActivity", "token")?;
        let handler = handler.unwrap_or_else(ignore_result);
        self.context
            .native
            .command(|native| native.enter_live_activity(activity_id, token, handler));
        Ok(())
    }

    pub fn exit(&self, activity_id: &str, handler: Option<NativeCallback>) -> OneSignalResult<()> {
        self.context.require_platform(Platform::Ios, "exitLiveActivity")?;
        require_non_empty(activity_id, "exitLiveActivity", "activity id")?;
        let handler = handler.unwrap_or_else(ignore_result);
        self.context
            .native
            .command(|native| native.exit_live_activity(activity_id, handler));
        Ok(())
    }

    /// Sets the pushToStart token for an activity type (iOS 17.2+).
    pub fn set_push_to_start_token(&self, activity_type: &str, token: &str) -> OneSignalResult<()> {
        self.context
            .require_platform(Platform::Ios, "setPushToStartToken")?;
        require_non_empty(activity_type, "setPushToStartToken", "activity type")?;
        require_non_empty(token, "setPushToStartToken", "token")?;
        self.context
            .native
            .command(|native| native.set_push_to_start_token(activity_type, token));
        Ok(())
    }

    pub fn remove_push_to_start_token(&self, activity_type: &str) -> OneSignalResult<()> {
        self.context
            .require_platform(Platform::Ios, "removePushToStartToken")?;
        require_non_empty(activity_type, "removePushToStartToken", "activity type")?;
        self.context
            .native
            .command(|native| native.remove_push_to_start_token(activity_type));
        Ok(())
    }

    /// Lets the native SDK own the lifecycle of the default activity type.
    pub fn setup_default(&self, options: Option<LiveActivitySetupOptions>) -> OneSignalResult<()> {
        self.context
            .require_platform(Platform::Ios, "setupDefaultLiveActivity")?;
        self.context
            .native
            .command(|native| native.setup_default_live_activity(options.as_ref()));
        Ok(())
    }

    /// Starts a default live activity. `attributes` are static, `content` is the
    /// initial dynamic state; both must be JSON objects.
    pub fn start_default(
        &self,
        activity_id: &str,
        attributes: &Value,
        content: &Value,
    ) -> OneSignalResult<()> {
        self.context
            .require_platform(Platform::Ios, "startDefaultLiveActivity")?;
        require_non_empty(activity_id, "startDefaultLiveActivity", "activity id")?;
        for (what, value) in [("attributes", attributes), ("content", content)] {
            if !value.is_object() {
                return Err(reject(format!(
                    "startDefaultLiveActivity: {what} must be a JSON object"
                )));
            }
        }
        self.context.native.command(|native| {
            native.start_default_live_activity(activity_id, attributes, content)
        });
        Ok(())
    }
}

fn ignore_result() -> NativeCallback {
    std::sync::Arc::new(|_: Value| {})
}
