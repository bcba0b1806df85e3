#![doc = include_str!("README.md")]
mod api;
mod push_subscription;
mod types;

pub use api::User;
pub use push_subscription::PushSubscription;
pub use types::{PushSubscriptionChangedState, PushSubscriptionState, UserChangedState, UserState};
