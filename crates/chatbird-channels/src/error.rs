use thiserror::Error;

/// Failures reported by a user directory backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("user directory unavailable: {0}")]
    Unavailable(String),

    #[error("invalid page cursor: {0}")]
    InvalidCursor(String),
}

/// Failures reported by the backend when creating a channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    #[error("channel creation rejected ({code}): {message}")]
    Rejected { code: u32, message: String },

    #[error("messaging backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("channel name must not be empty")]
    EmptyName,

    #[error("a channel needs at least one other member")]
    NoMembers,

    #[error(transparent)]
    Channel(#[from] ChannelError),
}
