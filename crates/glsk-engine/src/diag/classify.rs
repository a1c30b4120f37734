/// Subsystem that produced a driver debug message (`GL_DEBUG_SOURCE_*`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DebugSource {
    Api,
    WindowSystem,
    ShaderCompiler,
    ThirdParty,
    Application,
    Other,
    Unknown(u32),
}

impl DebugSource {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            glow::DEBUG_SOURCE_API => Self::Api,
            glow::DEBUG_SOURCE_WINDOW_SYSTEM => Self::WindowSystem,
            glow::DEBUG_SOURCE_SHADER_COMPILER => Self::ShaderCompiler,
            glow::DEBUG_SOURCE_THIRD_PARTY => Self::ThirdParty,
            glow::DEBUG_SOURCE_APPLICATION => Self::Application,
            glow::DEBUG_SOURCE_OTHER => Self::Other,
            other => Self::Unknown(other),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::WindowSystem => "WINDOW_SYSTEM",
            Self::ShaderCompiler => "SHADER_COMPILER",
            Self::ThirdParty => "THIRD_PARTY",
            Self::Application => "APPLICATION",
            Self::Other => "OTHER",
            Self::Unknown(_) => UNKNOWN_TAG,
        }
    }
}

/// Category of a driver debug message (`GL_DEBUG_TYPE_*`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DebugType {
    Error,
    DeprecatedBehavior,
    UndefinedBehavior,
    Portability,
    Performance,
    Marker,
    PushGroup,
    PopGroup,
    Other,
    Unknown(u32),
}

impl DebugType {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            glow::DEBUG_TYPE_ERROR => Self::Error,
            glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => Self::DeprecatedBehavior,
            glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => Self::UndefinedBehavior,
            glow::DEBUG_TYPE_PORTABILITY => Self::Portability,
            glow::DEBUG_TYPE_PERFORMANCE => Self::Performance,
            glow::DEBUG_TYPE_MARKER => Self::Marker,
            glow::DEBUG_TYPE_PUSH_GROUP => Self::PushGroup,
            glow::DEBUG_TYPE_POP_GROUP => Self::PopGroup,
            glow::DEBUG_TYPE_OTHER => Self::Other,
            other => Self::Unknown(other),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::DeprecatedBehavior => "DEPRECATED_BEHAVIOR",
            Self::UndefinedBehavior => "UNDEFINED_BEHAVIOR",
            Self::Portability => "PORTABILITY",
            Self::Performance => "PERFORMANCE",
            Self::Marker => "MARKER",
            Self::PushGroup => "PUSH_GROUP",
            Self::PopGroup => "POP_GROUP",
            Self::Other => "OTHER",
            Self::Unknown(_) => UNKNOWN_TAG,
        }
    }
}

/// Severity of a driver debug message (`GL_DEBUG_SEVERITY_*`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DebugSeverity {
    High,
    Medium,
    Low,
    Notification,
    Unknown(u32),
}

impl DebugSeverity {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            glow::DEBUG_SEVERITY_HIGH => Self::High,
            glow::DEBUG_SEVERITY_MEDIUM => Self::Medium,
            glow::DEBUG_SEVERITY_LOW => Self::Low,
            glow::DEBUG_SEVERITY_NOTIFICATION => Self::Notification,
            other => Self::Unknown(other),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Notification => "NOTIFICATION",
            Self::Unknown(_) => UNKNOWN_TAG,
        }
    }

    /// Log level used when the message reaches the `log` facade.
    pub fn level(self) -> log::Level {
        match self {
            Self::High => log::Level::Error,
            Self::Medium => log::Level::Warn,
            Self::Low => log::Level::Info,
            Self::Notification => log::Level::Debug,
            Self::Unknown(_) => log::Level::Warn,
        }
    }
}

/// Tag used for every enumerant outside the known set.
pub const UNKNOWN_TAG: &str = "UNKNOWN";
