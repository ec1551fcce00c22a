#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// Missing instance, zero window length or malformed kernel parameters
    InvalidArgument,
    /// Requested storage exceeds the buffer capacity
    AllocationFailure,
    /// Instance was never initialized or has been destroyed
    InvalidState,
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FilterError::InvalidArgument => write!(f, "invalid argument"),
            FilterError::AllocationFailure => write!(f, "buffer capacity exceeded"),
            FilterError::InvalidState => write!(f, "filter is not initialized or was destroyed"),
        }
    }
}

impl core::error::Error for FilterError {}
