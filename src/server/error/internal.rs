use thiserror::Error;

/// Internal issues indicating unexpected data or possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A text column holds a value outside its enumeration.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Unknown {kind} '{value}' stored in the database")]
    UnknownStoredValue {
        /// Which enumeration was being parsed
        kind: &'static str,
        /// The offending stored text
        value: String,
    },

    /// Hashing or verifying a password failed for a reason other than a
    /// mismatch, e.g. a malformed stored hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A row points at a parent row that is missing.
    #[error("{kind} {id} is missing")]
    DanglingReference {
        /// Which parent was expected
        kind: &'static str,
        /// Id stored in the referencing row
        id: i32,
    },
}
