//! Typed payload records decoded from envelope `data`.
//!
//! Field names follow the bridge's wire casing (camelCase, with the
//! BigBlueButton-style `attendeePW`/`moderatorPW` spellings). Timestamps are
//! Unix seconds on the wire.

use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A meeting summary, as returned by `create` and listed by `meetings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    #[serde(with = "ts_seconds")]
    pub created: DateTime<Utc>,
    #[serde(rename = "attendeePW")]
    pub attendee_pw: String,
    #[serde(rename = "moderatorPW")]
    pub moderator_pw: String,
    #[serde(rename = "forcedEnd", default)]
    pub forced_end: bool,
}

/// Full meeting details, as returned by `info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(with = "ts_seconds")]
    pub created: DateTime<Utc>,
    #[serde(rename = "attendeePW")]
    pub attendee_pw: String,
    #[serde(rename = "moderatorPW")]
    pub moderator_pw: String,
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub recording: bool,
    #[serde(default)]
    pub forced_end: bool,
    #[serde(with = "ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "ts_seconds")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub num_users: u32,
    #[serde(default)]
    pub num_mod: u32,
    #[serde(default)]
    pub max_users: u32,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

/// A participant entry inside [`MeetingInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub name: String,
    pub role: String,
}

/// A recorded meeting, as listed by `recordings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    pub record_id: String,
    pub meeting_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(with = "ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "ts_seconds")]
    pub end_time: DateTime<Utc>,
    pub playback: Playback,
}

/// Playback details of a [`Recording`]. `len` is the length in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playback {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub len: u32,
}

/// Payload of a `joinURL` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinUrlData {
    pub url: String,
}

/// Payload of an `end` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndData {
    pub ended: bool,
    #[serde(default)]
    pub id: String,
}

/// Payload of a `running` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningData {
    pub running: bool,
}

/// Payload of a `meetings` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingsData {
    pub meetings: Vec<Meeting>,
}

/// Payload of a `recordings` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingsData {
    pub recordings: Vec<Recording>,
}

/// Payload of a `recordings.publish` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishData {
    pub recordings: Vec<String>,
    pub published: bool,
}

/// Payload of a `recordings.delete` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteData {
    pub recordings: Vec<String>,
    pub deleted: bool,
}

/// Payload of a `*.fail` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureData {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Envelope;

    #[test]
    fn decode_create_response() {
        let envelope = Envelope::from_json(
            r#"{"event":"create","data":{
                "id":"524ee076d2ae5",
                "created":1380900973,
                "attendeePW":"Ktod567K",
                "moderatorPW":"zOO7DlJQ",
                "forcedEnd":false
            }}"#,
        )
        .unwrap();

        let meeting: Meeting = envelope.decode().unwrap();
        assert_eq!(meeting.id, "524ee076d2ae5");
        assert_eq!(meeting.attendee_pw, "Ktod567K");
        assert_eq!(meeting.moderator_pw, "zOO7DlJQ");
        assert_eq!(meeting.created.timestamp(), 1380900973);
        assert!(!meeting.forced_end);
    }

    #[test]
    fn decode_meeting_info_with_attendees() {
        let envelope = Envelope::from_json(
            r#"{"event":"info.succsess","data":{
                "id":"524ee076d2ae5",
                "name":"This meeting has NO name!",
                "created":1380900973,
                "attendeePW":"Ktod567K",
                "moderatorPW":"zOO7DlJQ",
                "running":true,
                "recording":false,
                "forcedEnd":false,
                "startTime":1380900980,
                "endTime":0,
                "numUsers":2,
                "numMod":1,
                "maxUsers":0,
                "attendees":[{"userID":"u1","name":"Alice","role":"MODERATOR"}]
            }}"#,
        )
        .unwrap();

        let info: MeetingInfo = envelope.decode().unwrap();
        assert_eq!(info.name, "This meeting has NO name!");
        assert!(info.running);
        assert_eq!(info.end_time.timestamp(), 0);
        assert_eq!(info.num_users, 2);
        assert_eq!(info.attendees.len(), 1);
        assert_eq!(info.attendees[0].role, "MODERATOR");
    }

    #[test]
    fn decode_meeting_info_without_attendees() {
        let envelope = Envelope::from_json(
            r#"{"event":"info","data":{
                "id":"m1","name":"","created":0,
                "attendeePW":"a","moderatorPW":"b",
                "startTime":0,"endTime":0
            }}"#,
        )
        .unwrap();

        let info: MeetingInfo = envelope.decode().unwrap();
        assert!(info.attendees.is_empty());
        assert!(!info.running);
    }

    #[test]
    fn decode_recordings_list() {
        let envelope = Envelope::from_json(
            r#"{"event":"recordings","data":{"recordings":[{
                "recordId":"09672563b912fc79",
                "meetingId":"524ee076d2ae5",
                "name":"Meeting 1",
                "startTime":1381313999,
                "endTime":1381314126,
                "playback":{
                    "type":"presentation",
                    "url":"http://bbb.example.com/playback/presentation/playback.html?meetingId=09672563b912fc79",
                    "len":3
                }
            }]}}"#,
        )
        .unwrap();

        let payload: RecordingsData = envelope.decode().unwrap();
        assert_eq!(payload.recordings.len(), 1);
        let recording = &payload.recordings[0];
        assert_eq!(recording.name, "Meeting 1");
        assert_eq!(recording.playback.kind, "presentation");
        assert_eq!(recording.playback.len, 3);
    }

    #[test]
    fn decode_scalar_payloads() {
        let running: RunningData = Envelope::from_json(r#"{"event":"running","data":{"running":true}}"#)
            .unwrap()
            .decode()
            .unwrap();
        assert!(running.running);

        let ended: EndData = Envelope::from_json(r#"{"event":"end","data":{"ended":true,"id":"m1"}}"#)
            .unwrap()
            .decode()
            .unwrap();
        assert!(ended.ended);
        assert_eq!(ended.id, "m1");

        let join: JoinUrlData =
            Envelope::from_json(r#"{"event":"joinURL","data":{"url":"https://x/join?a=1"}}"#)
                .unwrap()
                .decode()
                .unwrap();
        assert_eq!(join.url, "https://x/join?a=1");
    }

    #[test]
    fn decode_publish_and_delete_payloads() {
        let published: PublishData = Envelope::from_json(
            r#"{"event":"recordings","data":{"recordings":["r1","r2"],"published":true}}"#,
        )
        .unwrap()
        .decode()
        .unwrap();
        assert!(published.published);
        assert_eq!(published.recordings, vec!["r1", "r2"]);

        let deleted: DeleteData = Envelope::from_json(
            r#"{"event":"recordings","data":{"recordings":["r1"],"deleted":false}}"#,
        )
        .unwrap()
        .decode()
        .unwrap();
        assert!(!deleted.deleted);
    }

    #[test]
    fn decode_failure_payload() {
        let failure: FailureData =
            Envelope::from_json(r#"{"event":"create.fail","data":{"error":"duplicate"}}"#)
                .unwrap()
                .decode()
                .unwrap();
        assert_eq!(failure.error, "duplicate");

        // A failure event without a message does not decode.
        let envelope = Envelope::from_json(r#"{"event":"info.fail","data":{}}"#).unwrap();
        assert!(envelope.decode::<FailureData>().is_err());
    }

    #[test]
    fn meeting_serializes_with_wire_casing() {
        let envelope = Envelope::from_json(
            r#"{"event":"create","data":{"id":"m1","created":1,"attendeePW":"a","moderatorPW":"b","forcedEnd":true}}"#,
        )
        .unwrap();
        let meeting: Meeting = envelope.decode().unwrap();

        let json = serde_json::to_value(&meeting).unwrap();
        assert_eq!(json["attendeePW"], "a");
        assert_eq!(json["moderatorPW"], "b");
        assert_eq!(json["forcedEnd"], true);
        assert_eq!(json["created"], 1);
    }

    #[test]
    fn missing_required_field_is_a_payload_error() {
        let envelope =
            Envelope::from_json(r#"{"event":"create","data":{"id":"m1"}}"#).unwrap();
        assert!(envelope.decode::<Meeting>().is_err());
    }
}
