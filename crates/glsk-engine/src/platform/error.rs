/// Failure reported by the windowing layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("windowing subsystem initialization failed: {0}")]
    Init(String),

    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("failed to make context current: {0}")]
    MakeCurrent(String),

    #[error("failed to load the device function table: {0}")]
    FunctionTable(String),

    #[error("failed to present frame: {0}")]
    Present(String),
}

impl PlatformError {
    /// Numeric code carried on the windowing diagnostic channel.
    pub fn code(&self) -> i32 {
        match self {
            Self::Init(_) => 0x0001_0001,
            Self::WindowCreation(_) => 0x0001_0002,
            Self::MakeCurrent(_) => 0x0001_0003,
            Self::FunctionTable(_) => 0x0001_0004,
            Self::Present(_) => 0x0001_0005,
        }
    }
}
