use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored role string is not one of the known roles.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown role '{0}' stored for user")]
    ParseRole(String),

    /// Stored booking or payment status string is not recognized.
    #[error("Unknown {kind} status '{value}'")]
    ParseStatus {
        /// Which status column failed to parse
        kind: &'static str,
        /// The stored value
        value: String,
    },

    /// Hashing a password or reading a stored hash failed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Business settings JSON could not be read or written.
    #[error("Invalid business settings for business {business_id}: {source}")]
    SettingsFormat {
        business_id: i32,
        #[source]
        source: serde_json::Error,
    },
}
