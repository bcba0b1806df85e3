use crate::native::NativeLogLevel;
use crate::onesignal::context::BridgeContext;

/// Native SDK diagnostics.
///
/// These levels drive the native SDK's own console and alert output; the
/// bridge's loggers are configured through [`crate::logger`].
#[derive(Clone, Debug)]
pub struct Debug {
    context: BridgeContext,
}

impl Debug {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    pub fn set_log_level(&self, level: NativeLogLevel) {
        self.context
            .native
            .command(|native| native.set_log_level(level));
    }

    /// Level from which the native SDK shows alert dialogs.
    pub fn set_alert_level(&self, level: NativeLogLevel) {
        self.context
            .native
            .command(|native| native.set_alert_level(level));
    }
}
