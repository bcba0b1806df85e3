use crate::error::OneSignalResult;
use crate::onesignal::context::{reject, require_non_empty, BridgeContext};

/// Outcome reporting for the current session.
#[derive(Clone, Debug)]
pub struct Session {
    context: BridgeContext,
}

impl Session {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    pub fn add_outcome(&self, name: &str) -> OneSignalResult<()> {
        require_non_empty(name, "addOutcome", "outcome name")?;
        self.context.native.command(|native| native.add_outcome(name));
        Ok(())
    }

    /// Counts the outcome at most once per attributed notification.
    pub fn add_unique_outcome(&self, name: &str) -> OneSignalResult<()> {
        require_non_empty(name, "addUniqueOutcome", "outcome name")?;
        self.context
            .native
            .command(|native| native.add_unique_outcome(name));
        Ok(())
    }

    pub fn add_outcome_with_value(&self, name: &str, value: f64) -> OneSignalResult<()> {
        require_non_empty(name, "addOutcomeWithValue", "outcome name")?;
        if !value.is_finite() {
            return Err(reject(format!(
                "addOutcomeWithValue: value must be a finite number, got {value}"
            )));
        }
        self.context
            .native
            .command(|native| native.add_outcome_with_value(name, value));
        Ok(())
    }
}
