//! Debug configuration resolved at the process boundary
//!
//! The library never reads the environment. Front ends resolve a
//! [`DebugConfig`] once and pass `enabled` to each variable they create.

/// Environment variable that switches on per-operation tracing
pub const DEBUG_ENV_VAR: &str = "RIMP_DEBUG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugConfig {
    pub enabled: bool,
}

impl DebugConfig {
    /// Read `RIMP_DEBUG` from the process environment
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(DEBUG_ENV_VAR).ok().as_deref())
    }

    /// Only the exact value `"1"` enables tracing
    pub fn from_value(value: Option<&str>) -> Self {
        DebugConfig {
            enabled: value == Some("1"),
        }
    }

    /// Default `tracing` filter directive for this setting
    pub fn filter_directive(&self) -> &'static str {
        if self.enabled {
            "rimpvar=debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_enables_debug() {
        assert!(DebugConfig::from_value(Some("1")).enabled);
        assert!(!DebugConfig::from_value(Some("0")).enabled);
        assert!(!DebugConfig::from_value(Some("true")).enabled);
        assert!(!DebugConfig::from_value(Some(" 1")).enabled);
        assert!(!DebugConfig::from_value(None).enabled);
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(DebugConfig { enabled: true }.filter_directive(), "rimpvar=debug");
        assert_eq!(DebugConfig::default().filter_directive(), "warn");
    }
}
