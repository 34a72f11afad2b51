//!
//! # Drc Result and Error Types
//!

/// # [DrcError] Result Type
pub type DrcResult<T> = Result<T, DrcError>;

///
/// # Drc Error Enumeration
///
pub enum DrcError {
    /// Rule-configuration failure: missing file, parse error, missing
    /// required key, or ill-typed value. Fatal before any check runs.
    Config { message: String },
    /// File Input/Output
    Io(std::io::Error),
    /// Uncategorized Error, with String Message
    Str(String),
}
impl DrcError {
    /// Create a [DrcError::Str] from anything String-convertible
    pub fn msg(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }
    /// Create a [DrcError::Config] from anything String-convertible
    pub fn config(s: impl Into<String>) -> Self {
        Self::Config { message: s.into() }
    }
    /// Create an error-variant [Result] of our [DrcError::Str] variant from anything String-convertible
    pub fn fail<T>(s: impl Into<String>) -> Result<T, Self> {
        Err(Self::msg(s))
    }
}
impl std::fmt::Debug for DrcError {
    /// Display a [DrcError]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DrcError::Config { message } => write!(f, "Configuration Error: {}", message),
            DrcError::Io(err) => err.fmt(f),
            DrcError::Str(err) => err.fmt(f),
        }
    }
}
impl std::fmt::Display for DrcError {
    /// Display a [DrcError]
    /// Delegates to the [Debug] implementation
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
impl std::error::Error for DrcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<String> for DrcError {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}
impl From<&str> for DrcError {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}
impl From<std::io::Error> for DrcError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
