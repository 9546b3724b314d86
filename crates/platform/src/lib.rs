// Platform abstraction crate. No `cfg(target_os)` branches here; OS specifics live in the `platform-*` crates.

use std::fmt::Write;

/// Identifies the host operating system for capability queries.
pub trait PlatformImpl {
    /// Marketing name of the OS, e.g. "macOS".
    fn name() -> &'static str;

    /// Version string of the running OS. Must not be empty.
    fn version() -> String;
}

/// `"<name> <version>"` for the given platform, e.g. "macOS 14.2.1".
pub fn platform_version<P: PlatformImpl>() -> String {
    let version = P::version();
    let version = version.trim();
    if version.is_empty() {
        format!("{} unknown", P::name())
    } else {
        format!("{} {}", P::name(), version)
    }
}

/// Dotted version, dropping a zero patch component: (17, 0, 0) -> "17.0".
pub fn format_version(major: u64, minor: u64, patch: u64) -> String {
    let mut out = format!("{major}.{minor}");
    if patch != 0 {
        let _ = write!(out, ".{patch}");
    }
    out
}

/// Fallback used on targets without a dedicated `platform-*` crate.
pub struct GenericPlatform;

impl PlatformImpl for GenericPlatform {
    fn name() -> &'static str {
        std::env::consts::OS
    }

    fn version() -> String {
        "unknown".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl PlatformImpl for Fixed {
        fn name() -> &'static str {
            "iOS"
        }

        fn version() -> String {
            "17.0".to_string()
        }
    }

    struct Blank;

    impl PlatformImpl for Blank {
        fn name() -> &'static str {
            "Plan9"
        }

        fn version() -> String {
            "  ".to_string()
        }
    }

    #[test]
    fn test_platform_version_joins_name_and_version() {
        assert_eq!(platform_version::<Fixed>(), "iOS 17.0");
    }

    #[test]
    fn test_blank_version_reported_as_unknown() {
        assert_eq!(platform_version::<Blank>(), "Plan9 unknown");
    }

    #[test]
    fn test_format_version() {
        assert_eq!(format_version(17, 0, 0), "17.0");
        assert_eq!(format_version(14, 2, 1), "14.2.1");
        assert_eq!(format_version(10, 0, 22631), "10.0.22631");
    }

    #[test]
    fn test_generic_platform_is_prefixed_by_target_os() {
        let value = platform_version::<GenericPlatform>();
        assert!(value.starts_with(std::env::consts::OS));
        assert!(value.ends_with("unknown"));
    }
}
