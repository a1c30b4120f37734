use crate::platform::PlatformError;

/// Bootstrap step, in execution order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum BootstrapStep {
    SubsystemInit,
    SurfaceCreation,
    MakeCurrent,
    FunctionTable,
}

/// Terminal failure while acquiring a context.
///
/// Everything acquired by earlier steps has already been released by the
/// time this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("failed to initialize the windowing subsystem")]
    SubsystemInit(#[source] PlatformError),

    #[error("failed to create the window/surface")]
    SurfaceCreation(#[source] PlatformError),

    #[error("failed to bind the rendering context")]
    MakeCurrent(#[source] PlatformError),

    #[error("failed to load the device function table")]
    FunctionTable(#[source] PlatformError),
}

impl BootstrapError {
    pub fn step(&self) -> BootstrapStep {
        match self {
            Self::SubsystemInit(_) => BootstrapStep::SubsystemInit,
            Self::SurfaceCreation(_) => BootstrapStep::SurfaceCreation,
            Self::MakeCurrent(_) => BootstrapStep::MakeCurrent,
            Self::FunctionTable(_) => BootstrapStep::FunctionTable,
        }
    }

    pub fn platform_error(&self) -> &PlatformError {
        match self {
            Self::SubsystemInit(e)
            | Self::SurfaceCreation(e)
            | Self::MakeCurrent(e)
            | Self::FunctionTable(e) => e,
        }
    }
}
