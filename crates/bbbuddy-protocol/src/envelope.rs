//! The `{event, data}` envelope wrapping every bridge message.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::{ProtocolError, ProtocolResult};

/// Event names understood by the bridge.
///
/// Request events map one-to-one onto BigBlueButton API calls; the `*_FAIL`
/// names are response-only and signal an application-level failure.
pub mod event {
    pub const CREATE: &str = "create";
    pub const CREATE_FAIL: &str = "create.fail";
    pub const JOIN_URL: &str = "joinURL";
    pub const END: &str = "end";
    pub const RUNNING: &str = "running";
    pub const INFO: &str = "info";
    pub const INFO_FAIL: &str = "info.fail";
    pub const MEETINGS: &str = "meetings";
    pub const RECORDINGS: &str = "recordings";
    pub const RECORDINGS_PUBLISH: &str = "recordings.publish";
    pub const RECORDINGS_DELETE: &str = "recordings.delete";
}

/// Message envelope wrapping all bridge requests and responses.
///
/// `data` is a [`Map`] rather than a bare [`Value`] so that it serializes as
/// a JSON object in every case, including the empty one. The bridge rejects
/// lists and nulls in that position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// The requested operation, or the response/failure event name.
    pub event: String,
    /// Event-specific payload.
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Envelope {
    /// Creates an envelope with the given payload object.
    pub fn new(event: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }

    /// Creates an envelope with an empty payload.
    pub fn empty(event: impl Into<String>) -> Self {
        Self::new(event, Map::new())
    }

    /// Serializes the envelope to JSON text.
    pub fn to_json(&self) -> ProtocolResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses an envelope from JSON text.
    pub fn from_json(json: &str) -> ProtocolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes `data` into a typed payload record.
    ///
    /// Fails with [`ProtocolError::Payload`] when expected fields are
    /// missing or of the wrong shape.
    pub fn decode<T: DeserializeOwned>(&self) -> ProtocolResult<T> {
        serde_json::from_value(Value::Object(self.data.clone())).map_err(|source| {
            ProtocolError::Payload {
                event: self.event.clone(),
                source,
            }
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_serializes_as_object() {
        let envelope = Envelope::empty(event::MEETINGS);
        assert_eq!(
            envelope.to_json().unwrap(),
            r#"{"event":"meetings","data":{}}"#
        );
    }

    #[test]
    fn envelope_round_trip() {
        let mut data = Map::new();
        data.insert("id".to_string(), Value::String("m1".to_string()));
        data.insert("password".to_string(), Value::String("pw".to_string()));

        let envelope = Envelope::new(event::INFO, data);
        let decoded = Envelope::from_json(&envelope.to_json().unwrap()).unwrap();

        assert_eq!(decoded, envelope);
        assert_eq!(decoded.event, "info");
        assert_eq!(decoded.data["id"], "m1");
    }

    #[test]
    fn missing_data_defaults_to_empty_object() {
        let envelope = Envelope::from_json(r#"{"event":"running"}"#).unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn decode_reports_event_name_on_bad_shape() {
        let envelope =
            Envelope::from_json(r#"{"event":"running","data":{"running":"maybe"}}"#).unwrap();
        let err = envelope.decode::<crate::RunningData>().unwrap_err();
        assert!(matches!(err, ProtocolError::Payload { ref event, .. } if event == "running"));
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(matches!(
            Envelope::from_json("<html>oops</html>"),
            Err(ProtocolError::Serialization(_))
        ));
    }
}
