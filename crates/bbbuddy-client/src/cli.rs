//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// bbbuddy - Talk to a BigBlueButton server through a buddy bridge
#[derive(Debug, Parser)]
#[command(name = "bbbuddy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "BBBUDDY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bridge endpoint URL (e.g. http://localhost:8080/uh)
    #[arg(long, env = "BBBUDDY_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Upstream BigBlueButton API URL forwarded to the bridge
    #[arg(long, env = "BBBUDDY_SERVER_URL")]
    pub server_url: Option<String>,

    /// Shared secret forwarded to the bridge
    #[arg(long, env = "BBBUDDY_SECRET")]
    pub secret: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print raw JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands, one per bridge operation plus the walkthrough.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a meeting
    Create {
        /// Meeting identifier
        id: String,

        /// Meeting name
        #[arg(long)]
        name: Option<String>,

        /// Welcome message shown to joining participants
        #[arg(long)]
        welcome: Option<String>,

        /// URL participants are sent to on logout
        #[arg(long)]
        logout_url: Option<String>,

        /// Attendee password (generated by the server when omitted)
        #[arg(long)]
        attendee_pw: Option<String>,

        /// Moderator password (generated by the server when omitted)
        #[arg(long)]
        moderator_pw: Option<String>,

        /// Maximum number of participants
        #[arg(long)]
        max_participants: Option<u32>,

        /// Record the meeting
        #[arg(long)]
        record: bool,

        /// Maximum meeting length in seconds
        #[arg(long)]
        duration: Option<u64>,
    },

    /// Build a join URL for a participant
    Join {
        /// Participant display name
        name: String,
        /// Meeting identifier
        id: String,
        /// Attendee or moderator password
        password: String,

        /// Stable user identifier
        #[arg(long)]
        user_id: Option<String>,
    },

    /// End a running meeting
    End {
        /// Meeting identifier
        id: String,
        /// Moderator password
        password: String,
    },

    /// Check whether a meeting is running
    Running {
        /// Meeting identifier
        id: String,
    },

    /// Fetch detailed meeting information
    Info {
        /// Meeting identifier
        id: String,
        /// Moderator password
        password: String,
    },

    /// List the meetings known to the server
    Meetings,

    /// List recordings
    Recordings {
        /// Restrict to this meeting ID (can be repeated)
        #[arg(long = "meeting", action = clap::ArgAction::Append)]
        meetings: Vec<String>,
    },

    /// Publish recordings
    Publish {
        /// Recording IDs
        #[arg(required = true)]
        recordings: Vec<String>,

        /// Send publish=false instead
        #[arg(long)]
        unpublish: bool,
    },

    /// Delete recordings
    Delete {
        /// Recording IDs
        #[arg(required = true)]
        recordings: Vec<String>,
    },

    /// Replay the scripted walkthrough: create a meeting, fetch its info,
    /// list meetings, print a join URL, list recordings
    Demo,
}
