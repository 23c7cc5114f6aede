//! Error types for this library

use thiserror::Error;

use crate::Platform;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong below the public operations.
#[derive(Error, Debug)]
pub enum Failure {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` {}: {stderr}", exit_reason(.code))]
    Exit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    /// The command exited cleanly but still wrote to stderr.
    #[error("`{command}` reported: {stderr}")]
    Stderr { command: String, stderr: String },
    #[error("Drive detection via lsblk is not supported on {0}")]
    UnsupportedPlatform(Platform),
    #[error("Malformed output from `{command}`: {source}")]
    Json {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Failure {
    /// Message worth showing to a user. `None` means the generic message should be used.
    fn reason(&self) -> Option<String> {
        match self {
            Self::UnsupportedPlatform(_) => None,
            Self::Stderr { stderr, .. } if stderr.trim().is_empty() => None,
            _ => Some(self.to_string()),
        }
    }
}

fn exit_reason(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// The single error returned by every drive detection operation.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    message: String,
    platform: Platform,
    #[source]
    failure: Failure,
}

impl Error {
    pub(crate) fn new(platform: Platform, failure: Failure) -> Self {
        let message = failure
            .reason()
            .unwrap_or_else(|| fallback_message(platform));

        tracing::warn!("Drive detection failed on {platform}: {message}");

        Self {
            message,
            platform,
            failure,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Platform the detection was attempted on.
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Underlying cause.
    pub const fn failure(&self) -> &Failure {
        &self.failure
    }
}

pub(crate) fn fallback_message(platform: Platform) -> String {
    format!("Unable to detect drives on your {platform} system!")
}
