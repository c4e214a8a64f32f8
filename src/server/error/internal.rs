use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A value read from the database does not parse into its domain type.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse stored {field} value '{value}'")]
    ParseStoredValue {
        /// Column holding the value
        field: &'static str,
        /// The raw stored value
        value: String,
    },

    /// Hashing or verifying a password failed for a reason other than a mismatch.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
