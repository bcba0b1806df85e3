use crate::error::OneSignalResult;
use crate::onesignal::context::BridgeContext;

#[derive(Clone, Debug)]
pub struct Location {
    context: BridgeContext,
}

impl Location {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    /// Prompts the user for location permission.
    pub fn request_permission(&self) {
        self.context
            .native
            .command(|native| native.request_location_permission());
    }

    pub fn set_shared(&self, shared: bool) {
        self.context
            .native
            .command(|native| native.set_location_shared(shared));
    }

    pub async fn is_shared(&self) -> OneSignalResult<bool> {
        self.context.native.query()?.is_location_shared().await
    }
}
