//! Version of the library.

/// Parses a decimal version component at compile time.
const fn parse_component(s: &str) -> u32 {
    let b = s.as_bytes();
    let mut i = 0;
    let mut ret = 0;
    while i < b.len() {
        ret = ret * 10 + (b[i] - b'0') as u32;
        i += 1;
    }
    ret
}

const MAJOR: u32 = parse_component(env!("CARGO_PKG_VERSION_MAJOR"));
const MINOR: u32 = parse_component(env!("CARGO_PKG_VERSION_MINOR"));
const PATCH: u32 = parse_component(env!("CARGO_PKG_VERSION_PATCH"));

/// Returns the major version number of the library.
pub const fn version_major() -> u32 {
    MAJOR
}

/// Returns the minor version number of the library.
pub const fn version_minor() -> u32 {
    MINOR
}

/// Returns the patch version number of the library.
pub const fn version_patch() -> u32 {
    PATCH
}

/// Returns the pre-release part of the version, or an empty string for a release.
pub const fn version_prerelease() -> &'static str {
    env!("CARGO_PKG_VERSION_PRE")
}

/// Returns the full version string of the library, e.g. `0.1.0`.
pub const fn version_string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {

    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::format;

    #[test]
    fn test_version() {
        let mut v = format!("{}.{}.{}", version_major(), version_minor(), version_patch());
        if !version_prerelease().is_empty() {
            v = format!("{}-{}", v, version_prerelease());
        }
        assert_eq!(v, version_string());
        assert_eq!(parse_component("17"), 17);
    }
}
