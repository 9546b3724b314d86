use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::codec::JsonMethodCodec;
use crate::{MethodCall, MethodResponse, Responder};

/// Object-safe view of a dispatcher so channels with different responder
/// types can share one registry.
pub trait ChannelHandler: Send + Sync {
    fn handle(&self, call: &MethodCall) -> MethodResponse;
}

/// Routes invocations for one channel to its responder.
pub struct Dispatcher<R: Responder> {
    responder: R,
}

impl<R: Responder> Dispatcher<R> {
    pub fn new(responder: R) -> Self {
        Self { responder }
    }

    pub fn dispatch(&self, call: &MethodCall) -> MethodResponse {
        match R::resolve(&call.method) {
            Some(method) => {
                debug!("dispatching {:?}", method);
                MethodResponse::Success(self.responder.respond(method, call.arguments.as_ref()))
            }
            None => {
                debug!("method not implemented: {:?}", call.method);
                MethodResponse::NotImplemented
            }
        }
    }
}

impl<R: Responder> ChannelHandler for Dispatcher<R> {
    fn handle(&self, call: &MethodCall) -> MethodResponse {
        self.dispatch(call)
    }
}

/// Static registration hook a plugin exposes to the application bootstrap.
pub trait Plugin {
    fn register(registry: &mut ChannelRegistry);
}

/// Channel identifier -> handler bindings, built once at startup and then
/// shared read-only.
#[derive(Default)]
pub struct ChannelRegistry {
    channels: HashMap<String, Arc<dyn ChannelHandler>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to `channel`. An existing binding is replaced and returned.
    pub fn register(
        &mut self,
        channel: impl Into<String>,
        handler: Arc<dyn ChannelHandler>,
    ) -> Option<Arc<dyn ChannelHandler>> {
        let channel = channel.into();
        let previous = self.channels.insert(channel.clone(), handler);
        if previous.is_some() {
            warn!("channel {} re-registered, previous handler replaced", channel);
        } else {
            debug!("channel {} registered", channel);
        }
        previous
    }

    /// Convenience for the common case of one responder per channel.
    pub fn register_responder<R: Responder>(
        &mut self,
        channel: impl Into<String>,
        responder: R,
    ) -> Option<Arc<dyn ChannelHandler>> {
        self.register(channel, Arc::new(Dispatcher::new(responder)))
    }

    pub fn is_registered(&self, channel: &str) -> bool {
        self.channels.contains_key(channel)
    }

    pub fn channels(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.channels.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn dispatch(&self, channel: &str, call: &MethodCall) -> MethodResponse {
        match self.channels.get(channel) {
            Some(handler) => handler.handle(call),
            None => {
                warn!("no handler registered for channel {}", channel);
                MethodResponse::NotImplemented
            }
        }
    }

    /// Byte-level entry point. Undecodable messages still get a reply: the
    /// empty not-implemented envelope.
    pub fn handle_message(&self, channel: &str, message: &[u8]) -> Vec<u8> {
        let response = match JsonMethodCodec::decode_method_call(message) {
            Ok(call) => self.dispatch(channel, &call),
            Err(e) => {
                warn!("dropping undecodable call on {}: {}", channel, e);
                MethodResponse::NotImplemented
            }
        };
        JsonMethodCodec::encode_response(&response)
    }
}
