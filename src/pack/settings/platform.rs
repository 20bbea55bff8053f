//! Target platform selection.

use clap::ValueEnum;
use std::fmt;

/// Operating systems the packager can produce binaries for.
///
/// Parsed into a closed set at the boundary; an unrecognized value is a
/// usage error rather than a string handed through to the packaging
/// subprocess.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Windows x64
    Win,
    /// macOS x64
    Macos,
    /// Linux x64 (glibc)
    Linux,
    /// Alpine Linux x64 (musl)
    Alpine,
    /// Windows, macOS and Linux in a single run
    All,
}

impl Platform {
    /// Maps the current operating system to a packaging platform.
    ///
    /// Hosts other than Windows and macOS fall back to Linux.
    pub fn host() -> Self {
        match std::env::consts::OS {
            "windows" => Self::Win,
            "macos" => Self::Macos,
            _ => Self::Linux,
        }
    }

    /// Platform slug as it appears inside a target identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Macos => "macos",
            Self::Linux => "linux",
            Self::Alpine => "alpine",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_maps_to_a_single_concrete_platform() {
        let host = Platform::host();
        assert!(matches!(
            host,
            Platform::Win | Platform::Macos | Platform::Linux
        ));
    }

    #[test]
    fn value_enum_accepts_the_documented_set() {
        for (input, expected) in [
            ("win", Platform::Win),
            ("macos", Platform::Macos),
            ("linux", Platform::Linux),
            ("alpine", Platform::Alpine),
            ("all", Platform::All),
        ] {
            let parsed = Platform::from_str(input, true).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn value_enum_rejects_out_of_range_values() {
        assert!(Platform::from_str("solaris", true).is_err());
    }
}
