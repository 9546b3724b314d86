//! `bound_location_picker` plugin: answers platform capability queries over
//! its method channel.

use std::sync::Arc;

use bridge::{ChannelRegistry, Dispatcher, Plugin, Responder};
use platform::{platform_version, PlatformImpl};
use serde_json::Value;
use tracing::info;

/// Channel identifier shared with the application runtime.
pub const CHANNEL: &str = "bound_location_picker";

/// Methods this plugin answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginMethod {
    GetPlatformVersion,
}

impl PluginMethod {
    pub const ALL: [PluginMethod; 1] = [PluginMethod::GetPlatformVersion];

    /// Exact, case-sensitive match on the wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PluginMethod::GetPlatformVersion => "getPlatformVersion",
        }
    }
}

/// The OS this binary was built for.
#[cfg(target_os = "macos")]
pub type HostPlatform = platform_macos::MacOs;
#[cfg(target_os = "windows")]
pub type HostPlatform = platform_windows::Windows;
#[cfg(target_os = "linux")]
pub type HostPlatform = platform_linux::Linux;
#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
pub type HostPlatform = platform::GenericPlatform;

/// Capability responder. The platform string is read once at construction
/// and stays fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct PlatformResponder {
    platform_version: String,
}

impl PlatformResponder {
    pub fn new<P: PlatformImpl>() -> Self {
        Self {
            platform_version: platform_version::<P>(),
        }
    }

    pub fn for_host() -> Self {
        Self::new::<HostPlatform>()
    }

    pub fn platform_version(&self) -> &str {
        &self.platform_version
    }
}

impl Responder for PlatformResponder {
    type Method = PluginMethod;

    fn resolve(name: &str) -> Option<PluginMethod> {
        PluginMethod::from_name(name)
    }

    fn respond(&self, method: PluginMethod, _arguments: Option<&Value>) -> Value {
        match method {
            PluginMethod::GetPlatformVersion => Value::String(self.platform_version.clone()),
        }
    }
}

pub struct BoundLocationPickerPlugin;

impl Plugin for BoundLocationPickerPlugin {
    fn register(registry: &mut ChannelRegistry) {
        let responder = PlatformResponder::for_host();
        info!("registering {} ({})", CHANNEL, responder.platform_version());
        registry.register(CHANNEL, Arc::new(Dispatcher::new(responder)));
    }
}
