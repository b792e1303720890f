//! Typed per-operation option records.
//!
//! The bridge accepts arbitrary extra keys in the request `data` object;
//! these structs enumerate the ones the upstream BigBlueButton API actually
//! understands, so collisions with the named parameters of an operation are
//! visible at the type level instead of silently merged. Unset fields are
//! omitted from the wire entirely, matching the bridge's skip-empty encoder.

use chrono::serde::ts_seconds_option;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Options for `create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "attendeePW", skip_serializing_if = "Option::is_none")]
    pub attendee_pw: Option<String>,
    #[serde(rename = "moderatorPW", skip_serializing_if = "Option::is_none")]
    pub moderator_pw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome: Option<String>,
    #[serde(rename = "dialNumber", skip_serializing_if = "Option::is_none")]
    pub dial_number: Option<String>,
    #[serde(rename = "voiceBridge", skip_serializing_if = "Option::is_none")]
    pub voice_bridge: Option<String>,
    #[serde(rename = "webVoice", skip_serializing_if = "Option::is_none")]
    pub web_voice: Option<String>,
    #[serde(rename = "logoutURL", skip_serializing_if = "Option::is_none")]
    pub logout_url: Option<String>,
    #[serde(rename = "maxParticipants", skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "skip_false")]
    pub record: bool,
    /// Maximum meeting length in seconds.
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u64>,
}

/// Options for `joinURL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinOptions {
    /// Creation time of the meeting to join, Unix seconds on the wire.
    #[serde(
        rename = "createTime",
        with = "ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "webVoiceConf", skip_serializing_if = "Option::is_none")]
    pub web_voice_conf: Option<String>,
}

fn skip_false(value: &bool) -> bool {
    !*value
}

/// Serializes an option record into a request `data` object.
///
/// The caller inserts the operation's named parameters afterwards, so those
/// win on key collision.
pub(crate) fn to_data<T: Serialize>(options: &T) -> Result<Map<String, Value>, serde_json::Error> {
    let value = serde_json::to_value(options)?;
    // Option structs always serialize as objects.
    Ok(value.as_object().cloned().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_serialize_empty() {
        assert!(to_data(&CreateOptions::default()).unwrap().is_empty());
        assert!(to_data(&JoinOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn create_options_use_wire_names() {
        let options = CreateOptions {
            name: Some("Weekly sync".to_string()),
            moderator_pw: Some("modpw".to_string()),
            logout_url: Some("http://localhost:8081/".to_string()),
            max_participants: Some(25),
            record: true,
            duration_secs: Some(3600),
            ..Default::default()
        };

        let data = to_data(&options).unwrap();
        assert_eq!(data["name"], "Weekly sync");
        assert_eq!(data["moderatorPW"], "modpw");
        assert_eq!(data["logoutURL"], "http://localhost:8081/");
        assert_eq!(data["maxParticipants"], 25);
        assert_eq!(data["record"], true);
        assert_eq!(data["duration"], 3600);
        assert!(!data.contains_key("attendeePW"));
        assert!(!data.contains_key("welcome"));
    }

    #[test]
    fn record_false_is_omitted() {
        let data = to_data(&CreateOptions {
            name: Some("m".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(!data.contains_key("record"));
    }

    #[test]
    fn join_options_encode_create_time_as_unix_seconds() {
        let options = JoinOptions {
            create_time: DateTime::from_timestamp(1380900973, 0),
            user_id: Some("u-42".to_string()),
            ..Default::default()
        };

        let data = to_data(&options).unwrap();
        assert_eq!(data["createTime"], 1380900973);
        assert_eq!(data["userID"], "u-42");
        assert!(!data.contains_key("webVoiceConf"));
    }
}
