//! Error types and handling for Topicsmith

/// Result type alias for Topicsmith operations
pub type Result<T> = std::result::Result<T, TopicsmithError>;

/// Error types for string construction and topic naming
///
/// Both failure kinds are non-fatal and local: the function that hits the
/// condition logs it once and hands a sentinel back to its caller. There is
/// no retry anywhere in this crate.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TopicsmithError {
    /// Heap exhaustion while building an owned string
    #[error("Allocation failed: {requested} bytes requested")]
    AllocationFailed { requested: usize },

    /// A fixed-capacity formatting target was too small for the result
    #[error("Buffer too small: {required} bytes required, capacity is {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },

    /// Radix outside the supported [2, 16] range
    #[error("Invalid radix: {radix} (supported range is 2..=16)")]
    InvalidRadix { radix: u32 },
}

impl TopicsmithError {
    /// Create an allocation failure error
    pub fn allocation_failed(requested: usize) -> Self {
        Self::AllocationFailed { requested }
    }

    /// Create a buffer-too-small error
    pub fn buffer_too_small(required: usize, capacity: usize) -> Self {
        Self::BufferTooSmall { required, capacity }
    }

    /// Create an invalid radix error
    pub fn invalid_radix(radix: u32) -> Self {
        Self::InvalidRadix { radix }
    }

    /// The length the failed operation would have needed, when known
    pub fn required(&self) -> Option<usize> {
        match self {
            Self::AllocationFailed { requested } => Some(*requested),
            Self::BufferTooSmall { required, .. } => Some(*required),
            Self::InvalidRadix { .. } => None,
        }
    }
}
