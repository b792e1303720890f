//! bbbuddy CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use bbbuddy_client::cli::{Cli, Command};
use bbbuddy_client::config::ClientConfig;
use bbbuddy_client::error::{ApiError, ApiResult};
use bbbuddy_client::{ApiClient, CreateOptions, JoinOptions, output, secret};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Run the command
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ApiResult<()> {
    // Load configuration; CLI flags win over the file.
    let config = if let Some(ref path) = cli.config {
        ClientConfig::load_from(path)?
    } else {
        ClientConfig::load()?
    };

    let endpoint = cli
        .endpoint
        .or(config.endpoint)
        .ok_or_else(|| ApiError::Config("no bridge endpoint configured (--endpoint)".to_string()))?;
    let server_url = cli
        .server_url
        .or(config.server.url)
        .ok_or_else(|| ApiError::Config("no server URL configured (--server-url)".to_string()))?;
    let secret_ref = cli
        .secret
        .or(config.server.secret)
        .ok_or_else(|| ApiError::Config("no secret configured (--secret)".to_string()))?;
    let secret = secret::resolve(&secret_ref)?;
    let timeout = Duration::from_secs(cli.timeout.unwrap_or(config.timeout));

    let client = ApiClient::with_timeout(&endpoint, server_url, secret, timeout)?;
    let json = cli.json;

    match cli.command {
        Command::Create {
            id,
            name,
            welcome,
            logout_url,
            attendee_pw,
            moderator_pw,
            max_participants,
            record,
            duration,
        } => {
            let options = CreateOptions {
                name,
                welcome,
                logout_url,
                attendee_pw,
                moderator_pw,
                max_participants,
                record,
                duration_secs: duration,
                ..Default::default()
            };
            let meeting = client.create(&id, &options).await?;
            if json {
                println!("{}", output::to_json(&meeting)?);
            } else {
                println!("{}", output::render_meeting(&meeting));
            }
        }
        Command::Join {
            name,
            id,
            password,
            user_id,
        } => {
            let options = JoinOptions {
                user_id,
                ..Default::default()
            };
            let url = client.join_url(&name, &id, &password, &options).await?;
            println!("{}", url);
        }
        Command::End { id, password } => {
            let ended = client.end(&id, &password).await?;
            println!("{}", if ended { "ended" } else { "not ended" });
        }
        Command::Running { id } => {
            let running = client.is_meeting_running(&id).await?;
            println!("{}", if running { "running" } else { "not running" });
        }
        Command::Info { id, password } => {
            let info = client.meeting_info(&id, &password).await?;
            if json {
                println!("{}", output::to_json(&info)?);
            } else {
                print!("{}", output::render_meeting_info(&info));
            }
        }
        Command::Meetings => {
            let meetings = client.meetings().await?;
            if json {
                println!("{}", output::to_json(&meetings)?);
            } else {
                println!("{}", output::render_meetings(&meetings));
            }
        }
        Command::Recordings { meetings } => {
            let recordings = client.recordings(&meetings).await?;
            if json {
                println!("{}", output::to_json(&recordings)?);
            } else {
                println!("{}", output::render_recordings(&recordings));
            }
        }
        Command::Publish {
            recordings,
            unpublish,
        } => {
            let result = client.publish_recordings(&recordings, !unpublish).await?;
            if json {
                println!("{}", output::to_json(&result)?);
            } else {
                println!("{}", output::render_publish(&result));
            }
        }
        Command::Delete { recordings } => {
            let result = client.delete_recordings(&recordings).await?;
            if json {
                println!("{}", output::to_json(&result)?);
            } else {
                println!("{}", output::render_delete(&result));
            }
        }
        Command::Demo => demo(&client, json).await?,
    }

    Ok(())
}

/// Replays the original example script: create a meeting, fetch its info
/// with the moderator password, list meetings, print an attendee join URL,
/// list recordings.
async fn demo(client: &ApiClient, json: bool) -> ApiResult<()> {
    let id = Uuid::new_v4().simple().to_string();

    let options = CreateOptions {
        name: Some("This meeting has NO name!".to_string()),
        welcome: Some("Hi.".to_string()),
        logout_url: Some("http://localhost:8081/".to_string()),
        ..Default::default()
    };

    let meeting = client.create(&id, &options).await?;
    if json {
        println!("{}", output::to_json(&meeting)?);
    } else {
        println!("created: {}", output::render_meeting(&meeting));
    }

    let info = client
        .meeting_info(&meeting.id, &meeting.moderator_pw)
        .await?;
    if json {
        println!("{}", output::to_json(&info)?);
    } else {
        print!("{}", output::render_meeting_info(&info));
    }

    let meetings = client.meetings().await?;
    if json {
        println!("{}", output::to_json(&meetings)?);
    } else {
        println!("{}", output::render_meetings(&meetings));
    }

    let attendee = format!("Attendee {}", Uuid::new_v4().simple());
    let join = client
        .join_url(&attendee, &meeting.id, &meeting.attendee_pw, &JoinOptions::default())
        .await?;
    println!("JoinURL: {}", join);

    let recordings = client.recordings(&[]).await?;
    if json {
        println!("{}", output::to_json(&recordings)?);
    } else {
        println!("{}", output::render_recordings(&recordings));
    }

    Ok(())
}
