use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OneSignalErrorCode {
    NativeModuleNotLoaded,
    InvalidArgument,
    InvalidPayload,
    NativeCallFailed,
    UnsupportedPlatform,
}

impl OneSignalErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OneSignalErrorCode::NativeModuleNotLoaded => "bridge/native-module-not-loaded",
            OneSignalErrorCode::InvalidArgument => "bridge/invalid-argument",
            OneSignalErrorCode::InvalidPayload => "bridge/invalid-payload",
            OneSignalErrorCode::NativeCallFailed => "bridge/native-call-failed",
            OneSignalErrorCode::UnsupportedPlatform => "bridge/unsupported-platform",
        }
    }
}

#[derive(Clone, Debug)]
pub struct OneSignalError {
    pub code: OneSignalErrorCode,
    message: String,
}

impl OneSignalError {
    pub fn new(code: OneSignalErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for OneSignalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for OneSignalError {}

impl From<serde_json::Error> for OneSignalError {
    fn from(err: serde_json::Error) -> Self {
        invalid_payload(err.to_string())
    }
}

pub type OneSignalResult<T> = Result<T, OneSignalError>;

pub fn native_module_not_loaded() -> OneSignalError {
    OneSignalError::new(
        OneSignalErrorCode::NativeModuleNotLoaded,
        "OneSignal native module not loaded",
    )
}

pub fn invalid_argument(message: impl Into<String>) -> OneSignalError {
    OneSignalError::new(OneSignalErrorCode::InvalidArgument, message)
}

pub fn invalid_payload(message: impl Into<String>) -> OneSignalError {
    OneSignalError::new(OneSignalErrorCode::InvalidPayload, message)
}

pub fn native_call_failed(message: impl Into<String>) -> OneSignalError {
    OneSignalError::new(OneSignalErrorCode::NativeCallFailed, message)
}

pub fn unsupported_platform(message: impl Into<String>) -> OneSignalError {
    OneSignalError::new(OneSignalErrorCode::UnsupportedPlatform, message)
}
