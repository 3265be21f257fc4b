//! Decoding of frames pushed over the notification WebSocket.
//!
//! The socket transport belongs to the caller; it connects to
//! [`ClientConfig::socket_url`](crate::config::ClientConfig::socket_url) and
//! hands each text frame to [`SocketEvent::decode`]. Frames are JSON objects
//! with a `type` tag and a `data` payload.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::api::Notification;

const NOTIFICATION_FRAME: &str = "notification";

/// Errors raised while decoding a socket frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocketFrameError {
    /// The frame is not a JSON object with a `type` tag.
    #[error("malformed socket frame: {message}")]
    Malformed {
        /// Decoder message.
        message: String,
    },
    /// The frame's payload does not match its declared type.
    #[error("invalid '{kind}' frame payload: {message}")]
    InvalidPayload {
        /// Declared frame type.
        kind: String,
        /// Decoder message.
        message: String,
    },
}

/// An event received over the notification socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketEvent {
    /// A new notification for the signed-in user.
    Notification(Notification),
    /// A frame type this client does not handle.
    Unknown {
        /// Declared frame type.
        kind: String,
    },
}

#[derive(Debug, Deserialize)]
struct FrameDto {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

impl SocketEvent {
    /// Decode one text frame.
    ///
    /// # Errors
    ///
    /// Returns [`SocketFrameError::Malformed`] when the frame is not a tagged
    /// JSON object and [`SocketFrameError::InvalidPayload`] when a known frame
    /// type carries a payload of the wrong shape.
    pub fn decode(text: &str) -> Result<Self, SocketFrameError> {
        let frame: FrameDto =
            serde_json::from_str(text).map_err(|error| SocketFrameError::Malformed {
                message: error.to_string(),
            })?;

        if frame.kind != NOTIFICATION_FRAME {
            return Ok(Self::Unknown { kind: frame.kind });
        }
        serde_json::from_value(frame.data)
            .map(Self::Notification)
            .map_err(|error| SocketFrameError::InvalidPayload {
                kind: frame.kind,
                message: error.to_string(),
            })
    }
}
