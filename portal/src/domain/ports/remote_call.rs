//! The single failure kind surfaced by resource clients.
//!
//! Every transport problem or non-success response becomes a
//! [`RemoteCallError`] that callers receive unmodified. Nothing here retries
//! or reclassifies.

use super::define_port_error;

define_port_error! {
    /// A remote call failed.
    pub enum RemoteCallError {
        /// No response arrived (connection, TLS or timeout failure).
        Transport { message: String } =>
            "remote call failed before a response arrived: {message}",
        /// The server answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "remote call rejected with status {status}: {message}",
        /// A success response carried a body that does not match the contract.
        Decode { message: String } =>
            "remote call returned an undecodable body: {message}",
    }
}

impl RemoteCallError {
    /// HTTP status of the response, when one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// Human-readable detail without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Rejected { message, .. }
            | Self::Decode { message } => message.as_str(),
        }
    }
}
