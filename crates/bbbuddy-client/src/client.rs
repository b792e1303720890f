//! HTTP client for the buddy bridge.
//!
//! Every operation is a single POST of a JSON envelope to the bridge
//! endpoint, with the upstream server URL and shared secret as query
//! parameters. There is no connection state beyond the client's own
//! configuration fields.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use bbbuddy_protocol::{
    DeleteData, EndData, Envelope, FailureData, JoinUrlData, Meeting, MeetingInfo, MeetingsData,
    PublishData, Recording, RecordingsData, RunningData, event,
};

use crate::error::{ApiError, ApiResult};
use crate::options::{self, CreateOptions, JoinOptions};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a buddy bridge endpoint.
///
/// Holds the bridge endpoint URL plus the two credential fields forwarded on
/// every call. Construction performs no network I/O.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: Url,
    server_url: String,
    secret: String,
}

impl ApiClient {
    /// Creates a client with the default timeout.
    ///
    /// `endpoint` is the bridge URL (e.g. `http://localhost:8080/uh`);
    /// `server_url` and `secret` identify the upstream BigBlueButton server
    /// and must be non-empty.
    pub fn new(
        endpoint: &str,
        server_url: impl Into<String>,
        secret: impl Into<String>,
    ) -> ApiResult<Self> {
        Self::with_timeout(endpoint, server_url, secret, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit request timeout.
    pub fn with_timeout(
        endpoint: &str,
        server_url: impl Into<String>,
        secret: impl Into<String>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let server_url = server_url.into();
        let secret = secret.into();
        if server_url.is_empty() {
            return Err(ApiError::Config("server URL must not be empty".to_string()));
        }
        if secret.is_empty() {
            return Err(ApiError::Config("secret must not be empty".to_string()));
        }

        let endpoint = parse_endpoint(endpoint)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            server_url,
            secret,
        })
    }

    /// Returns the current bridge endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Points the client at a different bridge endpoint for future requests.
    pub fn set_endpoint(&mut self, endpoint: &str) -> ApiResult<&mut Self> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }

    /// Creates a meeting and returns its summary record.
    pub async fn create(&self, id: &str, options: &CreateOptions) -> ApiResult<Meeting> {
        let mut data = options::to_data(options).map_err(bbbuddy_protocol::ProtocolError::from)?;
        data.insert("id".to_string(), Value::String(id.to_string()));
        let response = Self::fail_on(event::CREATE_FAIL, self.emit(event::CREATE, data).await?)?;
        Ok(response.decode()?)
    }

    /// Builds a join URL for a participant.
    pub async fn join_url(
        &self,
        name: &str,
        id: &str,
        password: &str,
        options: &JoinOptions,
    ) -> ApiResult<String> {
        let mut data = options::to_data(options).map_err(bbbuddy_protocol::ProtocolError::from)?;
        data.insert("name".to_string(), Value::String(name.to_string()));
        data.insert("id".to_string(), Value::String(id.to_string()));
        data.insert("password".to_string(), Value::String(password.to_string()));
        let response = self.emit(event::JOIN_URL, data).await?;
        let payload: JoinUrlData = response.decode()?;
        Ok(payload.url)
    }

    /// Ends a meeting. Returns whether the bridge reports it as ended.
    pub async fn end(&self, id: &str, password: &str) -> ApiResult<bool> {
        let mut data = Map::new();
        data.insert("id".to_string(), Value::String(id.to_string()));
        data.insert("password".to_string(), Value::String(password.to_string()));
        let payload: EndData = self.emit(event::END, data).await?.decode()?;
        Ok(payload.ended)
    }

    /// Checks whether a meeting is currently running.
    pub async fn is_meeting_running(&self, id: &str) -> ApiResult<bool> {
        let mut data = Map::new();
        data.insert("id".to_string(), Value::String(id.to_string()));
        let payload: RunningData = self.emit(event::RUNNING, data).await?.decode()?;
        Ok(payload.running)
    }

    /// Fetches full details of a meeting.
    pub async fn meeting_info(&self, id: &str, password: &str) -> ApiResult<MeetingInfo> {
        let mut data = Map::new();
        data.insert("id".to_string(), Value::String(id.to_string()));
        data.insert("password".to_string(), Value::String(password.to_string()));
        let response = Self::fail_on(event::INFO_FAIL, self.emit(event::INFO, data).await?)?;
        Ok(response.decode()?)
    }

    /// Lists the meetings known to the upstream server.
    pub async fn meetings(&self) -> ApiResult<Vec<Meeting>> {
        let payload: MeetingsData = self.emit(event::MEETINGS, Map::new()).await?.decode()?;
        Ok(payload.meetings)
    }

    /// Lists recordings, optionally restricted to the given meeting IDs.
    pub async fn recordings(&self, meetings: &[String]) -> ApiResult<Vec<Recording>> {
        let mut data = Map::new();
        data.insert("meetings".to_string(), string_list(meetings));
        let payload: RecordingsData = self.emit(event::RECORDINGS, data).await?.decode()?;
        Ok(payload.recordings)
    }

    /// Publishes (or, with `publish = false`, unpublishes) recordings.
    ///
    /// The flag is forwarded verbatim; the returned record reports what the
    /// server actually did.
    pub async fn publish_recordings(
        &self,
        recordings: &[String],
        publish: bool,
    ) -> ApiResult<PublishData> {
        let mut data = Map::new();
        data.insert("recordings".to_string(), string_list(recordings));
        data.insert("publish".to_string(), Value::Bool(publish));
        Ok(self.emit(event::RECORDINGS_PUBLISH, data).await?.decode()?)
    }

    /// Deletes recordings.
    pub async fn delete_recordings(&self, recordings: &[String]) -> ApiResult<DeleteData> {
        let mut data = Map::new();
        data.insert("recordings".to_string(), string_list(recordings));
        Ok(self.emit(event::RECORDINGS_DELETE, data).await?.decode()?)
    }

    /// Sends one envelope and returns the decoded response envelope.
    ///
    /// Fails with [`ApiError::Transport`] on any non-200 status and with
    /// [`ApiError::Protocol`] when the body is not a JSON envelope.
    async fn emit(&self, event: &str, data: Map<String, Value>) -> ApiResult<Envelope> {
        let body = Envelope::new(event, data).to_json()?;
        debug!(event, endpoint = %self.endpoint, "emitting request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .query(&[
                ("url", self.server_url.as_str()),
                ("secret", self.secret.as_str()),
            ])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Network("request timeout".to_string())
                } else if e.is_connect() {
                    ApiError::Network(format!("connection failed: {}", e))
                } else {
                    ApiError::Network(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read response: {}", e)))?;

        if status != StatusCode::OK {
            warn!(%status, "bridge returned non-OK status");
            return Err(ApiError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let envelope = Envelope::from_json(&body)?;
        debug!(event = %envelope.event, "response received");
        Ok(envelope)
    }

    /// Turns a distinguished failure event into [`ApiError::Remote`],
    /// passing every other envelope through unchanged.
    fn fail_on(failure: &str, envelope: Envelope) -> ApiResult<Envelope> {
        if envelope.event == failure {
            let message = envelope
                .decode::<FailureData>()
                .map(|failure| failure.error)
                .unwrap_or_else(|_| "no error message supplied".to_string());
            return Err(ApiError::Remote {
                event: envelope.event,
                message,
            });
        }
        Ok(envelope)
    }
}

fn parse_endpoint(endpoint: &str) -> ApiResult<Url> {
    Url::parse(endpoint)
        .map_err(|e| ApiError::Config(format!("invalid endpoint URL '{}': {}", endpoint, e)))
}

fn string_list(items: &[String]) -> Value {
    Value::Array(items.iter().map(|s| Value::String(s.clone())).collect())
}
