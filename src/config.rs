//! Service configuration
//!
//! Read once from the environment at startup.

use crate::row::NegativePolicy;

/// Environment variable that switches negative numbers to clamp-to-zero
pub const CLAMP_NEGATIVE_VAR: &str = "IROW_CLAMP_NEGATIVE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowConfig {
    pub negative_policy: NegativePolicy,
}

impl RowConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let clamp = lookup(CLAMP_NEGATIVE_VAR)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            negative_policy: if clamp {
                NegativePolicy::Clamp
            } else {
                NegativePolicy::Accept
            },
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
