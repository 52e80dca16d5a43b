//! Defines the crate level error type.

/// The errors that may occur when using the store.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The operation was called without a user ID.
    ///
    /// The caller should have the user sign in again before retrying.
    #[error("a signed in user is required for this operation")]
    AuthRequired,

    /// A required field was missing, empty or malformed.
    ///
    /// The string describes which field was rejected and why.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The requested record was not found.
    ///
    /// This is also returned when the record exists but belongs to another
    /// user, so callers cannot probe for other users' IDs. Deleting the same
    /// record twice will produce this error on the second attempt, which
    /// callers should treat as a benign outcome.
    #[error("the requested record could not be found")]
    NotFound,

    /// A newly generated record ID clashed with an existing one.
    #[error("the record ID already exists in the database")]
    DuplicateRecordId,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 1555 occurs when a PRIMARY KEY constraint failed and 2067
            // when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, _)
                if sql_error.extended_code == 1555 || sql_error.extended_code == 2067 =>
            {
                Error::DuplicateRecordId
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}
