use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the channel index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(rename = "uuid")]
    pub id: String,
    #[serde(rename = "channelName")]
    pub display_name: String,
    /// Carried through from the index but never rendered.
    #[serde(rename = "channelIcon")]
    pub icon_url: String,
}

/// Channel index keyed by the opaque channel key of the API response.
///
/// Keys iterate in lexicographic order, so every pass over the same
/// response visits them identically.
pub type ChannelMap = BTreeMap<String, Channel>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_channel_map() {
        let body = r#"{
            "ch010": {"uuid": "def", "channelName": "CCTV2", "channelIcon": "http://img/2.png"},
            "ch001": {"uuid": "abc", "channelName": "CCTV1", "channelIcon": ""}
        }"#;

        let map: ChannelMap = serde_json::from_str(body).unwrap();
        assert_eq!(map.len(), 2);

        let first = &map["ch001"];
        assert_eq!(first.id, "abc");
        assert_eq!(first.display_name, "CCTV1");
        assert_eq!(first.icon_url, "");
        assert_eq!(map["ch010"].icon_url, "http://img/2.png");

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["ch001", "ch010"]);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let body = r#"{"ch1": {"uuid": "abc", "channelName": "CCTV1"}}"#;
        assert!(serde_json::from_str::<ChannelMap>(body).is_err());
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let body = r#"{"ch1": {"uuid": 42, "channelName": "CCTV1", "channelIcon": ""}}"#;
        assert!(serde_json::from_str::<ChannelMap>(body).is_err());
    }

    #[test]
    fn test_array_body_is_rejected() {
        let body = r#"[{"uuid": "abc", "channelName": "CCTV1", "channelIcon": ""}]"#;
        assert!(serde_json::from_str::<ChannelMap>(body).is_err());
    }
}
