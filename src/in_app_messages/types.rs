use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InAppMessage {
    pub message_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InAppMessageClickResult {
    #[serde(default)]
    pub closing_message: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Where `url` opens: `"browser"`, `"webview"` or `"replacement"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_target: Option<String>,
}

/// Delivered when the user taps an element of an in-app message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InAppMessageClickEvent {
    pub message: InAppMessage,
    #[serde(default)]
    pub result: InAppMessageClickResult,
}

macro_rules! lifecycle_event {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub message: InAppMessage,
        }
    };
}

lifecycle_event!(
    /// The message is about to be shown.
    InAppMessageWillDisplayEvent
);
lifecycle_event!(InAppMessageDidDisplayEvent);
lifecycle_event!(
    /// The message is about to be dismissed.
    InAppMessageWillDismissEvent
);
lifecycle_event!(InAppMessageDidDismissEvent);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn click_event_decodes_camel_case_fields() {
        let event: InAppMessageClickEvent = serde_json::from_value(json!({
            "message": { "messageId": "m-1" },
            "result": {
                "closingMessage": true,
                "actionId": "cta",
                "url": "https://example.com",
                "urlTarget": "browser"
            }
        }))
        .unwrap();

        assert_eq!(event.message.message_id, "m-1");
        assert!(event.result.closing_message);
        assert_eq!(event.result.action_id.as_deref(), Some("cta"));
        assert_eq!(event.result.url_target.as_deref(), Some("browser"));
    }

    #[test]
    fn lifecycle_event_requires_message() {
        assert!(serde_json::from_value::<InAppMessageDidDismissEvent>(json!({})).is_err());
    }
}
