use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse an ID from a String
    ///
    /// Occurs when the subject claim of a correctly signed token is not a numeric
    /// member ID. Results in a 500 Internal Server Error with a generic message
    /// returned to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A member row or token claim carries a role outside of `ADMIN` / `USER`.
    #[error("Unknown member role '{0}'")]
    UnknownRole(String),

    /// Signing a login token failed.
    #[error("Failed to create login token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// Token verification failed for a reason other than a bad token, such as a
    /// key problem.
    #[error("Failed to verify login token: {0}")]
    TokenDecoding(#[source] jsonwebtoken::errors::Error),

    /// Hashing or parsing a stored password hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A blocking task (password hashing) panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
