use thiserror::Error;

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Errors that can occur when configuring or running the splitter
#[derive(Error, Debug)]
pub enum ChunkError {
    /// Profile breaks the `0 <= overlap < target` contract
    #[error("Invalid chunk profile: overlap {overlap} must be smaller than target {target}")]
    InvalidProfile { target: usize, overlap: usize },
}

impl ChunkError {
    /// Create an invalid profile error
    pub fn invalid_profile(target: usize, overlap: usize) -> Self {
        Self::InvalidProfile { target, overlap }
    }
}
