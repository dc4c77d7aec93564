// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Host(HostError),
}

/// Requests the player sends to its host collaborators.
///
/// Every one of them is asynchronous and failable on a real platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    Play,
    EnterFullscreen,
    ExitFullscreen,
    EnterPictureInPicture,
    ExitPictureInPicture,
    LockOrientation,
    UnlockOrientation,
}

impl HostRequest {
    /// Short label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            HostRequest::Play => "play",
            HostRequest::EnterFullscreen => "enter fullscreen",
            HostRequest::ExitFullscreen => "exit fullscreen",
            HostRequest::EnterPictureInPicture => "enter picture-in-picture",
            HostRequest::ExitPictureInPicture => "exit picture-in-picture",
            HostRequest::LockOrientation => "lock orientation",
            HostRequest::UnlockOrientation => "unlock orientation",
        }
    }
}

/// A host request that was refused or could not be attempted.
///
/// The player never surfaces these to the user: they are logged and the
/// request silently has no effect.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// The host refused the request (autoplay policy, permission denied...).
    Rejected { request: HostRequest, reason: String },

    /// The host has no capability for this request.
    Unsupported(HostRequest),
}

impl HostError {
    pub fn rejected(request: HostRequest, reason: impl Into<String>) -> Self {
        HostError::Rejected {
            request,
            reason: reason.into(),
        }
    }

    /// The request this error belongs to.
    pub fn request(&self) -> HostRequest {
        match self {
            HostError::Rejected { request, .. } | HostError::Unsupported(request) => *request,
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Rejected { request, reason } => {
                write!(f, "{} rejected: {}", request.label(), reason)
            }
            HostError::Unsupported(request) => write!(f, "{} not supported", request.label()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Host(e) => write!(f, "Host Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<HostError> for Error {
    fn from(err: HostError) -> Self {
        Error::Host(err)
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

pub type Result<T> = std::result::Result<T, Error>;

/// Logs a failed host request and drops it.
///
/// This is the only handling a [`HostError`] ever gets: no retry, nothing
/// shown to the user.
pub fn log_rejection(err: &HostError) {
    log::warn!("{err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn rejected_display_names_the_request() {
        let err = HostError::rejected(HostRequest::Play, "NotAllowedError");
        assert_eq!(err.to_string(), "play rejected: NotAllowedError");
        assert_eq!(err.request(), HostRequest::Play);
    }

    #[test]
    fn unsupported_display_names_the_request() {
        let err = HostError::Unsupported(HostRequest::EnterPictureInPicture);
        assert_eq!(err.to_string(), "enter picture-in-picture not supported");
    }

    #[test]
    fn host_error_converts_into_error() {
        let err: Error = HostError::Unsupported(HostRequest::LockOrientation).into();
        assert!(matches!(err, Error::Host(_)));
        assert!(err.to_string().starts_with("Host Error:"));
    }

    #[test]
    fn toml_error_maps_to_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
