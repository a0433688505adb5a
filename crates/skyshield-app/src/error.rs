//! Error types for the host application.

use thiserror::Error;

/// Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures of the host around the simulation. The simulation itself has
/// no error paths.
#[derive(Debug, Error)]
pub enum AppError {
    /// The OS refused to start the game loop thread.
    #[error("Failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// The game loop has exited and no longer accepts commands.
    #[error("Game loop is not running")]
    LoopDisconnected,

    /// The game loop thread panicked.
    #[error("Game loop thread panicked")]
    LoopPanicked,

    /// A command-line argument could not be used.
    #[error("Invalid value for '{flag}': {message}")]
    InvalidArgument {
        /// The flag being parsed.
        flag: String,
        /// What was wrong with it.
        message: String,
    },

    /// The audio collaborator could not play an event.
    #[error("Audio playback failed: {0}")]
    Audio(String),
}
