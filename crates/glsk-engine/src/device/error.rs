/// Failure of a raw device call that has an error channel.
///
/// Only object allocation can fail this way; everything else the device
/// reports goes through the driver's debug output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    #[error("failed to allocate {object}: {reason}")]
    Allocation {
        object: &'static str,
        reason: String,
    },
}

impl DeviceError {
    pub fn allocation(object: &'static str, reason: impl Into<String>) -> Self {
        Self::Allocation {
            object,
            reason: reason.into(),
        }
    }
}
