use thiserror::Error;

/// Internal issues indicating unexpected behavior or exhausted resources.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Every generated candidate id collided with an existing record.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to generate a unique id with prefix '{prefix}' after {attempts} attempts")]
    IdGenerationExhausted {
        /// Prefix of the generated ids
        prefix: String,
        /// Number of candidates tried
        attempts: usize,
    },

    /// Password hashing or hash parsing failed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}
