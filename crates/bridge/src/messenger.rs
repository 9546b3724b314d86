//! Asynchronous message transport between the application runtime and the
//! registry. Each message gets its own reply slot, so every send resolves to
//! exactly one reply or `Disconnected`.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::codec::JsonMethodCodec;
use crate::registry::ChannelRegistry;
use crate::{BridgeError, MethodCall, MethodResponse, Result};

const QUEUE_DEPTH: usize = 32;

struct Envelope {
    channel: String,
    payload: Vec<u8>,
    reply: oneshot::Sender<Vec<u8>>,
}

/// Creates a connected messenger/host-loop pair over `registry`.
pub fn channel(registry: Arc<ChannelRegistry>) -> (BinaryMessenger, HostLoop) {
    let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
    (BinaryMessenger { tx }, HostLoop { registry, rx })
}

/// Runtime-side handle for sending raw messages.
#[derive(Clone)]
pub struct BinaryMessenger {
    tx: mpsc::Sender<Envelope>,
}

impl BinaryMessenger {
    pub async fn send(&self, channel: &str, payload: Vec<u8>) -> Result<Vec<u8>> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Envelope {
                channel: channel.to_string(),
                payload,
                reply,
            })
            .await
            .map_err(|_| BridgeError::Disconnected)?;
        rx.await.map_err(|_| BridgeError::Disconnected)
    }
}

/// Host side: answers queued messages in order until every messenger is gone.
pub struct HostLoop {
    registry: Arc<ChannelRegistry>,
    rx: mpsc::Receiver<Envelope>,
}

impl HostLoop {
    pub async fn run(mut self) {
        info!(channels = self.registry.len(), "host loop started");
        while let Some(envelope) = self.rx.recv().await {
            let reply = self
                .registry
                .handle_message(&envelope.channel, &envelope.payload);
            if envelope.reply.send(reply).is_err() {
                debug!("caller on {} went away before the reply", envelope.channel);
            }
        }
        info!("host loop stopped");
    }
}

/// Named channel issuing method calls through a messenger.
#[derive(Clone)]
pub struct MethodChannel {
    name: String,
    messenger: BinaryMessenger,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>, messenger: BinaryMessenger) -> Self {
        Self {
            name: name.into(),
            messenger,
        }
    }

    pub async fn invoke_method(
        &self,
        method: &str,
        arguments: Option<Value>,
    ) -> Result<MethodResponse> {
        let call = MethodCall {
            method: method.to_string(),
            arguments,
        };
        let payload = JsonMethodCodec::encode_method_call(&call)?;
        let reply = self.messenger.send(&self.name, payload).await?;
        JsonMethodCodec::decode_response(&reply)
    }
}
