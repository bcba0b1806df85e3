use std::fmt;
use std::sync::Arc;

use crate::error::{native_module_not_loaded, OneSignalResult};
use crate::native::logger::LOGGER;
use crate::native::module::NativeModule;

const NOT_LOADED_MESSAGE: &str =
    "Could not load the OneSignal native module. Make sure native dependencies are properly linked.";

/// Possibly-absent reference to the native module.
///
/// An unloaded handle turns commands into no-ops and queries into
/// [`native_module_not_loaded`] errors.
#[derive(Clone, Default)]
pub struct NativeHandle {
    module: Option<Arc<dyn NativeModule>>,
}

impl NativeHandle {
    pub fn new(module: Arc<dyn NativeModule>) -> Self {
        Self {
            module: Some(module),
        }
    }

    pub fn unloaded() -> Self {
        Self { module: None }
    }

    pub fn from_option(module: Option<Arc<dyn NativeModule>>) -> Self {
        Self { module }
    }

    pub fn is_loaded(&self) -> bool {
        self.module.is_some()
    }

    pub fn module(&self) -> Option<&dyn NativeModule> {
        self.module.as_deref()
    }

    /// Runs a command against the module, logging an error when it is not loaded.
    ///
    /// Returns whether the command reached the native side.
    pub(crate) fn command<F>(&self, f: F) -> bool
    where
        F: FnOnce(&dyn NativeModule),
    {
        match self.module.as_deref() {
            Some(module) => {
                f(module);
                true
            }
            None => {
                LOGGER.error(NOT_LOADED_MESSAGE);
                false
            }
        }
    }

    /// Module for an async query, or the not-loaded error.
    pub(crate) fn query(&self) -> OneSignalResult<&dyn NativeModule> {
        self.module.as_deref().ok_or_else(|| {
            LOGGER.error(NOT_LOADED_MESSAGE);
            native_module_not_loaded()
        })
    }

    /// Imperative call issued by a payload object; silently dropped when unloaded.
    pub(crate) fn payload_call<F>(&self, operation: &str, notification_id: &str, f: F)
    where
        F: FnOnce(&dyn NativeModule),
    {
        match self.module.as_deref() {
            Some(module) => f(module),
            None => log::debug!(
                "dropping {operation} for notification {notification_id}: native module not loaded"
            ),
        }
    }
}

impl fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeHandle")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl PartialEq for NativeHandle {
    fn eq(&self, other: &Self) -> bool {
        match (&self.module, &other.module) {
            (Some(a), Some(b)) => Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const (),
            (None, None) => true,
            _ => false,
        }
    }
}
