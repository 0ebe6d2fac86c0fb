//! Build metadata embedded by build.rs
//!
//! The build script sets `IROW_BUILD_NUMBER` and `IROW_BUILD_TIMESTAMP`; builds
//! that skip it (docs, some IDE checks) fall back to 0 and "unknown".

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local build counter, 0 when the build script did not run
pub fn build_number() -> u64 {
    parse_build_number(option_env!("IROW_BUILD_NUMBER"))
}

/// UTC compile time, "unknown" when the build script did not run
pub fn build_timestamp() -> &'static str {
    option_env!("IROW_BUILD_TIMESTAMP").unwrap_or("unknown")
}

fn parse_build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// One-line banner logged when the server starts
pub fn startup_banner() -> String {
    format!(
        "Ingredient Row Editor v{} (build {}, compiled {})",
        VERSION,
        build_number(),
        build_timestamp()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_number() {
        assert_eq!(parse_build_number(Some("42")), 42);
        assert_eq!(parse_build_number(Some(" 7\n")), 7);
        assert_eq!(parse_build_number(Some("12a")), 0);
        assert_eq!(parse_build_number(None), 0);
    }

    #[test]
    fn test_startup_banner() {
        let banner = startup_banner();
        assert!(banner.starts_with("Ingredient Row Editor v"));
        assert!(banner.contains(VERSION));
        assert!(banner.contains(build_timestamp()));
    }
}
