#![doc = include_str!("README.md")]
mod api;
pub(crate) mod context;
mod debug;
mod live_activities;
mod location;
mod options;
mod session;

pub use api::OneSignal;
pub use debug::Debug;
pub use live_activities::LiveActivities;
pub use location::Location;
pub use options::OneSignalOptions;
pub use session::Session;
