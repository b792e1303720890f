//! Human-readable rendering of bridge responses.
//!
//! The `--json` flag bypasses all of this and prints the typed record
//! serialized back to JSON.

use serde::Serialize;

use bbbuddy_protocol::{DeleteData, Meeting, MeetingInfo, PublishData, Recording};

use crate::error::{ApiError, ApiResult};

/// Serializes any response record as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> ApiResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::Protocol(bbbuddy_protocol::ProtocolError::from(e)))
}

/// One line per meeting summary.
pub fn render_meeting(meeting: &Meeting) -> String {
    format!(
        "{}  created {}  attendeePW {}  moderatorPW {}{}",
        meeting.id,
        meeting.created.format("%Y-%m-%d %H:%M:%S UTC"),
        meeting.attendee_pw,
        meeting.moderator_pw,
        if meeting.forced_end { "  (force-ended)" } else { "" },
    )
}

/// Multi-line meeting details.
pub fn render_meeting_info(info: &MeetingInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("meeting:     {}\n", info.id));
    out.push_str(&format!("name:        {}\n", info.name));
    out.push_str(&format!(
        "created:     {}\n",
        info.created.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("attendeePW:  {}\n", info.attendee_pw));
    out.push_str(&format!("moderatorPW: {}\n", info.moderator_pw));
    out.push_str(&format!(
        "running:     {}  recording: {}  force-ended: {}\n",
        info.running, info.recording, info.forced_end
    ));
    out.push_str(&format!(
        "users:       {} ({} moderators, max {})\n",
        info.num_users, info.num_mod, info.max_users
    ));
    for attendee in &info.attendees {
        out.push_str(&format!(
            "attendee:    {} [{}] {}\n",
            attendee.name, attendee.role, attendee.user_id
        ));
    }
    out
}

/// One line per recording.
pub fn render_recording(recording: &Recording) -> String {
    format!(
        "{}  {}  {} .. {}  {} ({} min)\n  {}",
        recording.record_id,
        recording.name,
        recording.start_time.format("%Y-%m-%d %H:%M"),
        recording.end_time.format("%H:%M"),
        recording.playback.kind,
        recording.playback.len,
        recording.playback.url,
    )
}

pub fn render_meetings(meetings: &[Meeting]) -> String {
    if meetings.is_empty() {
        return "no meetings".to_string();
    }
    meetings
        .iter()
        .map(render_meeting)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_recordings(recordings: &[Recording]) -> String {
    if recordings.is_empty() {
        return "no recordings".to_string();
    }
    recordings
        .iter()
        .map(render_recording)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_publish(result: &PublishData) -> String {
    format!(
        "{}: {}",
        if result.published { "published" } else { "not published" },
        result.recordings.join(", ")
    )
}

pub fn render_delete(result: &DeleteData) -> String {
    format!(
        "{}: {}",
        if result.deleted { "deleted" } else { "not deleted" },
        result.recordings.join(", ")
    )
}
