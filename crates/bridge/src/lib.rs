//! Method-channel bridge between an application runtime and host-side responders.
//! Routes named invocations to the responder bound to a channel and always
//! answers with exactly one response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod codec;
pub mod messenger;
pub mod registry;

pub use codec::JsonMethodCodec;
pub use messenger::{BinaryMessenger, HostLoop, MethodChannel};
pub use registry::{ChannelHandler, ChannelRegistry, Dispatcher, Plugin};

/// Bridge-specific errors
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Remote error {code}: {message}")]
    Remote {
        code: String,
        message: String,
        details: Value,
    },

    #[error("Host loop disconnected")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, BridgeError>;

/// A single named request sent across a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(rename = "args", default)]
    pub arguments: Option<Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    pub fn with_arguments(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments: Some(arguments),
        }
    }
}

/// Outcome of a dispatched call.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Value),
    /// The method name is outside the responder's known set. The caller
    /// decides whether that is an error.
    NotImplemented,
}

impl MethodResponse {
    pub fn is_implemented(&self) -> bool {
        matches!(self, MethodResponse::Success(_))
    }

    pub fn success(&self) -> Option<&Value> {
        match self {
            MethodResponse::Success(value) => Some(value),
            MethodResponse::NotImplemented => None,
        }
    }
}

/// Host-side logic answering a fixed, enumerated set of methods.
pub trait Responder: Send + Sync + 'static {
    type Method: Copy + std::fmt::Debug;

    /// Maps a wire method name to a known method, `None` for anything else.
    fn resolve(name: &str) -> Option<Self::Method>;

    /// Answers a resolved method. Only called for names `resolve` accepted.
    fn respond(&self, method: Self::Method, arguments: Option<&Value>) -> Value;
}
