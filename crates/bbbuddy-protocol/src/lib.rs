//! Wire types for the buddy bridge protocol.
//!
//! The bridge exposes a BigBlueButton server through a single HTTP endpoint
//! that speaks JSON envelopes. Every request and response is wrapped in an
//! [`Envelope`]:
//!
//! ```text
//! { "event": "<name>", "data": { ... } }
//! ```
//!
//! `data` is always a JSON object, even when empty. Application-level
//! failures are signalled through distinguished event names (`create.fail`,
//! `info.fail`) carrying `data.error`, as opposed to HTTP-level failures
//! which never produce an envelope at all.
//!
//! # Example
//!
//! ```rust
//! use bbbuddy_protocol::{Envelope, MeetingsData, event};
//!
//! let request = Envelope::empty(event::MEETINGS);
//! assert_eq!(request.to_json().unwrap(), r#"{"event":"meetings","data":{}}"#);
//!
//! let response = Envelope::from_json(r#"{"event":"meetings","data":{"meetings":[]}}"#).unwrap();
//! let payload: MeetingsData = response.decode().unwrap();
//! assert!(payload.meetings.is_empty());
//! ```

mod envelope;
mod error;
mod types;

pub use envelope::{Envelope, event};
pub use error::{ProtocolError, ProtocolResult};
pub use types::{
    Attendee, DeleteData, EndData, FailureData, JoinUrlData, Meeting, MeetingInfo, MeetingsData,
    Playback, PublishData, Recording, RecordingsData, RunningData,
};
