use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the outer layers (input loading, config, CLI).
///
/// The grid core itself never fails: malformed records degrade to defaults.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing ------------------------------------------------------------
    /// Bad CLI arguments, bad config values or a malformed schedule document.
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (invalid JSON, unknown key, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// Generic error when a message should bubble without a new variant.
    #[error("{0}")]
    Domain(String),

    /// IO passthrough (reading schedule files, writing config, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
