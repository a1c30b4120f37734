use std::path::PathBuf;

use crate::context::ContextConfig;
use crate::device::ClearColor;

/// Overrides the directory shader sources are read from.
pub const SHADER_DIR_ENV: &str = "GLSK_SHADER_DIR";

/// Everything one session needs, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct StarterConfig {
    pub context: ContextConfig,
    pub shader_root: PathBuf,
    pub clear_color: ClearColor,
}

impl Default for StarterConfig {
    fn default() -> Self {
        Self {
            context: ContextConfig::default(),
            shader_root: PathBuf::from("assets/shaders"),
            clear_color: ClearColor::default(),
        }
    }
}

impl StarterConfig {
    pub fn from_env() -> Self {
        let mut config = Self {
            context: ContextConfig::from_env(),
            ..Self::default()
        };

        if let Some(dir) = std::env::var_os(SHADER_DIR_ENV).filter(|d| !d.is_empty()) {
            config.shader_root = PathBuf::from(dir);
        }

        log::debug!("starter config: {config:?}");
        config
    }

    pub fn with_shader_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.shader_root = root.into();
        self
    }
}
