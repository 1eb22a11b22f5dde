use thiserror::Error;

/// Error types for `TextBuffer` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TextBufferError {
    /// The allocator refused to grow the buffer
    #[error("Allocation failed: could not reserve {requested} more bytes")]
    AllocationFailed {
        /// Number of additional bytes requested
        requested: usize,
    },
    /// A `Display` implementation reported an error while formatting
    #[error("Formatting failed")]
    Format,
    /// The buffer holds no NUL terminator
    #[error("Buffer is not NUL-terminated")]
    MissingTerminator,
}

impl embedded_io::Error for TextBufferError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            TextBufferError::AllocationFailed { .. } => embedded_io::ErrorKind::OutOfMemory,
            TextBufferError::Format | TextBufferError::MissingTerminator => {
                embedded_io::ErrorKind::Other
            }
        }
    }
}
