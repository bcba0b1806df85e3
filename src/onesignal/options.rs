use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{invalid_argument, OneSignalResult};
use crate::logger::LogLevel;
use crate::platform::{environment, Platform};

/// Construction options for [`OneSignal`](crate::onesignal::OneSignal).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OneSignalOptions {
    /// Initializes the native SDK right away when set.
    pub app_id: Option<String>,
    pub platform: Platform,
    /// Level applied to the bridge's own loggers.
    pub log_level: Option<LogLevel>,
}

impl OneSignalOptions {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// Reads options from `ONESIGNAL_DEFAULTS` / `ONESIGNAL_DEFAULTS_PATH`,
    /// falling back to the defaults when neither is set.
    pub fn from_env() -> OneSignalResult<Self> {
        match environment::onesignal_defaults() {
            Some(defaults) => serde_json::from_value(Value::Object(defaults))
                .map_err(|err| invalid_argument(format!("Invalid OneSignal defaults: {err}"))),
            None => Ok(Self::default()),
        }
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }
}
