//! macOS platform identification through `NSProcessInfo`.

#![cfg(target_os = "macos")]

use objc::runtime::Object;
use objc::{class, msg_send, sel, sel_impl};
use platform::{format_version, PlatformImpl};

#[link(name = "Foundation", kind = "framework")]
extern "C" {}

/// Mirrors Foundation's `NSOperatingSystemVersion`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct NSOperatingSystemVersion {
    major: isize,
    minor: isize,
    patch: isize,
}

pub struct MacOs;

impl MacOs {
    fn operating_system_version() -> NSOperatingSystemVersion {
        // SAFETY: `processInfo` always returns the shared instance and
        // `operatingSystemVersion` is available since 10.10.
        unsafe {
            let info: *mut Object = msg_send![class!(NSProcessInfo), processInfo];
            msg_send![info, operatingSystemVersion]
        }
    }
}

impl PlatformImpl for MacOs {
    fn name() -> &'static str {
        "macOS"
    }

    fn version() -> String {
        let v = Self::operating_system_version();
        format_version(v.major as u64, v.minor as u64, v.patch as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_dotted() {
        let version = MacOs::version();
        assert!(version.split('.').count() >= 2, "unexpected version {version}");
        assert!(platform::platform_version::<MacOs>().starts_with("macOS "));
    }
}
