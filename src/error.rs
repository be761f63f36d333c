// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Snapshot(String),
    Camera(CameraError),
}

/// Specific error types for camera acquisition issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum CameraError {
    /// The capture device is missing, busy, or otherwise unreachable
    DeviceUnavailable,

    /// The pipeline stopped delivering frames in time
    Timeout,

    /// The requested frame geometry cannot be produced (e.g. zero-sized)
    InvalidResolution,

    /// The acquisition task ended unexpectedly
    Disconnected,

    /// Generic error with raw message
    Other(String),
}

impl CameraError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CameraError::DeviceUnavailable => "error-camera-unavailable",
            CameraError::Timeout => "error-camera-timeout",
            CameraError::InvalidResolution => "error-camera-resolution",
            CameraError::Disconnected => "error-camera-disconnected",
            CameraError::Other(_) => "error-camera-general",
        }
    }

    /// Attempts to parse a raw error message into a specific CameraError type.
    /// This is used to categorize errors coming out of the acquisition task.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("busy")
            || msg_lower.contains("unavailable")
            || msg_lower.contains("no such device")
            || msg_lower.contains("not found")
            || msg_lower.contains("permission denied")
        {
            return CameraError::DeviceUnavailable;
        }

        if msg_lower.contains("timeout") || msg_lower.contains("timed out") {
            return CameraError::Timeout;
        }

        if msg_lower.contains("resolution")
            || msg_lower.contains("dimension")
            || msg_lower.contains("zero-sized")
        {
            return CameraError::InvalidResolution;
        }

        if msg_lower.contains("disconnected") || msg_lower.contains("channel closed") {
            return CameraError::Disconnected;
        }

        CameraError::Other(msg.to_string())
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::DeviceUnavailable => write!(f, "Capture device unavailable"),
            CameraError::Timeout => write!(f, "Acquisition timed out"),
            CameraError::InvalidResolution => write!(f, "Invalid frame resolution"),
            CameraError::Disconnected => write!(f, "Acquisition task disconnected"),
            CameraError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Snapshot(e) => write!(f, "Snapshot Error: {}", e),
            Error::Camera(e) => write!(f, "Camera Error: {}", e),
        }
    }
}

impl From<CameraError> for Error {
    fn from(err: CameraError) -> Self {
        Error::Camera(err)
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
