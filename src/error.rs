// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Geolocation(GeolocationError),
}

/// Specific error types for position-stream failures.
/// Mirrors the failure modes a browser geolocation watch reports, plus the
/// capability-unavailable case checked before subscribing.
#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationError {
    /// No position source is available in this environment
    Unsupported,

    /// The user (or platform policy) denied access to location data
    PermissionDenied,

    /// The source could not produce a fix
    PositionUnavailable,

    /// No fix arrived within the configured timeout (milliseconds)
    Timeout(u64),

    /// Generic error with raw message
    Other(String),
}

impl GeolocationError {
    /// Attempts to parse a raw provider message into a specific error type.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("denied") || msg_lower.contains("permission") {
            return GeolocationError::PermissionDenied;
        }

        if msg_lower.contains("unavailable") || msg_lower.contains("no fix") {
            return GeolocationError::PositionUnavailable;
        }

        if msg_lower.contains("not supported") || msg_lower.contains("unsupported") {
            return GeolocationError::Unsupported;
        }

        if msg_lower.contains("timeout") || msg_lower.contains("timed out") {
            return GeolocationError::Timeout(0);
        }

        GeolocationError::Other(msg.to_string())
    }
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeolocationError::Unsupported => {
                write!(f, "Geolocation is not supported on this system.")
            }
            GeolocationError::PermissionDenied => {
                write!(f, "Location permission denied.")
            }
            GeolocationError::PositionUnavailable => {
                write!(f, "Position unavailable.")
            }
            GeolocationError::Timeout(ms) => {
                if *ms > 0 {
                    write!(f, "Position request timed out after {}ms.", ms)
                } else {
                    write!(f, "Position request timed out.")
                }
            }
            GeolocationError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Geolocation(e) => write!(f, "Geolocation Error: {}", e),
        }
    }
}

impl From<GeolocationError> for Error {
    fn from(err: GeolocationError) -> Self {
        Error::Geolocation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
