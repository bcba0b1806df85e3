//! Test utilities shared across crate-level unit tests.

mod native;

pub use native::{NativeCall, RecordingNativeModule};
