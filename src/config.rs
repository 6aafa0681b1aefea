//! Startup configuration.

/// Environment variable carrying the local/dev mode flag.
pub const LOCAL_ENV_VAR: &str = "NATVIEW_LOCAL";

/// Configuration read once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Raw value of the local/dev flag, if set.
    pub local: Option<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            local: lookup(LOCAL_ENV_VAR),
        }
    }

    /// Force local mode on, keeping an existing raw value.
    pub fn with_local(mut self) -> Self {
        if !self.is_local() {
            self.local = Some("true".to_string());
        }
        self
    }

    /// Whether the local/dev flag is set to a truthy value.
    pub fn is_local(&self) -> bool {
        match self.local.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(v) => !matches!(
                v.to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
        }
    }
}
