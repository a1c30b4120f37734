use crate::platform::{ApiVersion, SurfaceRequest};

/// Environment switch for the driver diagnostics pipeline.
pub const DIAGNOSTICS_ENV: &str = "GLSK_DIAGNOSTICS";

/// Context acquisition parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub api_version: ApiVersion,

    /// Request a debug-capable context and wire the driver's debug output
    /// into the diagnostic channel.
    pub diagnostics: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Open GL Starter Kit".to_string(),
            api_version: ApiVersion::default(),
            diagnostics: cfg!(debug_assertions),
        }
    }
}

impl ContextConfig {
    /// Defaults, with `diagnostics` overridden by `GLSK_DIAGNOSTICS` when set
    /// to a recognizable value.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(DIAGNOSTICS_ENV) {
            match parse_switch(&raw) {
                Some(on) => config.diagnostics = on,
                None => log::warn!("{DIAGNOSTICS_ENV}={raw:?} not understood; keeping default"),
            }
        }
        config
    }

    pub fn surface_request(&self) -> SurfaceRequest {
        SurfaceRequest {
            width: self.width,
            height: self.height,
            title: self.title.clone(),
            api_version: self.api_version,
            debug_context: self.diagnostics,
        }
    }
}

pub(crate) fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_values() {
        for on in ["1", "true", "ON", " yes "] {
            assert_eq!(parse_switch(on), Some(true), "{on}");
        }
        for off in ["0", "False", "off", "no"] {
            assert_eq!(parse_switch(off), Some(false), "{off}");
        }
        assert_eq!(parse_switch("maybe"), None);
    }

    #[test]
    fn surface_request_mirrors_config() {
        let config = ContextConfig {
            diagnostics: true,
            ..ContextConfig::default()
        };
        let req = config.surface_request();
        assert_eq!((req.width, req.height), (1280, 720));
        assert_eq!(req.api_version, ApiVersion::new(4, 6));
        assert!(req.debug_context);
    }
}
