//! Linux platform identification from the running kernel release.

#![cfg(target_os = "linux")]

use std::fs;
use std::path::Path;

use platform::PlatformImpl;
use tracing::warn;

const OSRELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

pub struct Linux;

/// First non-empty line of an `osrelease`-style file.
pub(crate) fn read_release(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string),
        Err(e) => {
            warn!("failed to read kernel release from {}: {}", path.display(), e);
            None
        }
    }
}

impl PlatformImpl for Linux {
    fn name() -> &'static str {
        "Linux"
    }

    fn version() -> String {
        read_release(Path::new(OSRELEASE_PATH)).unwrap_or_else(|| "unknown".to_string())
    }
}
