use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to convert Unix timestamp to Discord timestamp
    ///
    /// Occurs when a valid Unix timestamp cannot be converted to Discord's
    /// timestamp format, typically due to timestamp being out of range.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },

    /// A blocking task panicked or was cancelled before returning.
    #[error("Blocking task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
