#![doc = include_str!("RUSTDOC.md")]

pub mod error;
pub mod events;
pub mod in_app_messages;
pub mod logger;
pub mod native;
pub mod notifications;
pub mod onesignal;
pub mod platform;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;
