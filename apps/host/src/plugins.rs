use bound_location_picker::BoundLocationPickerPlugin;
use bridge::{ChannelRegistry, Plugin};
use tracing::info;

/// Registers every plugin linked into this host. Call once during bootstrap,
/// before any call is dispatched.
pub fn register_plugins(registry: &mut ChannelRegistry) {
    BoundLocationPickerPlugin::register(registry);
    info!("registered channels: {:?}", registry.channels());
}
