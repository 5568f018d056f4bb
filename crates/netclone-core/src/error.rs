// ── Core error types ──
//
// Every variant aborts the whole reconstruction. Consumers never see
// reqwest or serde errors directly: the `From<netclone_api::Error>` impl
// folds transport-layer failures into the connection/transport variants.

use thiserror::Error;

use crate::model::NodeKind;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Transport errors ─────────────────────────────────────────────
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Controller request timed out: {url}")]
    Timeout { url: String },

    #[error("Controller snapshot unavailable: {message}")]
    Transport {
        message: String,
        /// HTTP status code (if the controller answered at all).
        status: Option<u16>,
    },

    // ── Reconstruction errors ────────────────────────────────────────
    #[error("Duplicate {kind} identity {identity} in controller snapshot")]
    DuplicateIdentity { identity: String, kind: NodeKind },

    #[error("Unresolved endpoint {identifier} in {record}")]
    UnresolvedEndpoint { identifier: String, record: String },

    #[error("Duplicate label {label} (assigned to host {identity})")]
    DuplicateLabel { label: String, identity: String },

    #[error("Host {identity} has no usable IPv4 address to derive a label from")]
    MissingHostAddress { identity: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` if the snapshot could not be obtained from the controller.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. } | Self::Timeout { .. } | Self::Transport { .. }
        )
    }

    /// Returns `true` if the snapshot was obtained but is internally inconsistent.
    pub fn is_inconsistent_snapshot(&self) -> bool {
        matches!(
            self,
            Self::DuplicateIdentity { .. }
                | Self::UnresolvedEndpoint { .. }
                | Self::DuplicateLabel { .. }
                | Self::MissingHostAddress { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<netclone_api::Error> for CoreError {
    fn from(err: netclone_api::Error) -> Self {
        if err.is_timeout() {
            return CoreError::Timeout {
                url: request_url(&err),
            };
        }
        if err.is_connect() {
            return CoreError::ConnectionFailed {
                url: request_url(&err),
                reason: err.to_string(),
            };
        }

        match err {
            netclone_api::Error::Transport(e) => CoreError::Transport {
                message: e.to_string(),
                status: e.status().map(|s| s.as_u16()),
            },
            netclone_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            // Client construction, before any request is made
            netclone_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS setup failed: {msg}"),
            },
            netclone_api::Error::Status { status, url } => CoreError::Transport {
                message: format!("HTTP {status} from {url}"),
                status: Some(status),
            },
            netclone_api::Error::Deserialization { message, body: _ } => CoreError::Transport {
                message: format!("malformed controller payload: {message}"),
                status: None,
            },
        }
    }
}

fn request_url(err: &netclone_api::Error) -> String {
    match err {
        netclone_api::Error::Transport(e) => e
            .url()
            .map_or_else(|| "<unknown>".into(), ToString::to_string),
        netclone_api::Error::Status { url, .. } => url.clone(),
        _ => "<unknown>".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_transport() {
        let err = CoreError::from(netclone_api::Error::Status {
            status: 502,
            url: "http://controller/wm/device/".into(),
        });
        assert!(err.is_transport());
        assert!(matches!(err, CoreError::Transport { status: Some(502), .. }));
    }

    #[test]
    fn tls_setup_failure_is_config_error() {
        let err = CoreError::from(netclone_api::Error::Tls(
            "failed to read CA cert: No such file or directory".into(),
        ));

        assert!(!err.is_transport());
        match err {
            CoreError::Config { message } => assert!(message.contains("failed to read CA cert")),
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn malformed_payload_maps_to_transport() {
        let err = CoreError::from(netclone_api::Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        });
        assert!(err.is_transport());
        assert!(!err.is_inconsistent_snapshot());
    }

    #[test]
    fn reconstruction_errors_are_inconsistent_snapshot() {
        let err = CoreError::UnresolvedEndpoint {
            identifier: "00:00:00:00:00:00:00:09".into(),
            record: "link".into(),
        };
        assert!(err.is_inconsistent_snapshot());
        assert!(!err.is_transport());
    }
}
