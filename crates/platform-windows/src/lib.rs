//! Windows platform identification.
//!
//! `GetVersionExW` reports the manifest-compatible version rather than the real
//! one, so the kernel's `RtlGetVersion` is queried instead.

#![cfg(target_os = "windows")]

use platform::{format_version, PlatformImpl};
use windows_sys::Wdk::System::SystemServices::RtlGetVersion;
use windows_sys::Win32::System::SystemInformation::OSVERSIONINFOW;

pub struct Windows;

impl Windows {
    fn os_version_info() -> Option<OSVERSIONINFOW> {
        // SAFETY: OSVERSIONINFOW is plain data; zeroed is a valid initial state
        // once the size field is set.
        let mut info: OSVERSIONINFOW = unsafe { std::mem::zeroed() };
        info.dwOSVersionInfoSize = std::mem::size_of::<OSVERSIONINFOW>() as u32;
        let status = unsafe { RtlGetVersion(&mut info) };
        (status == 0).then_some(info)
    }
}

impl PlatformImpl for Windows {
    fn name() -> &'static str {
        "Windows"
    }

    fn version() -> String {
        match Self::os_version_info() {
            // Build numbers are never zero, so the patch slot always shows.
            Some(info) => format_version(
                info.dwMajorVersion as u64,
                info.dwMinorVersion as u64,
                info.dwBuildNumber as u64,
            ),
            None => "unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_has_build_number() {
        let version = Windows::version();
        assert_eq!(version.split('.').count(), 3, "unexpected version {version}");
    }
}
