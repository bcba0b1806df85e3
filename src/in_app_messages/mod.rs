#![doc = include_str!("README.md")]
mod api;
mod types;

pub use api::InAppMessages;
pub use types::{
    InAppMessage, InAppMessageClickEvent, InAppMessageClickResult, InAppMessageDidDismissEvent,
    InAppMessageDidDisplayEvent, InAppMessageWillDismissEvent, InAppMessageWillDisplayEvent,
};
