/// Failure reported by an external lookup (existence check or role state).
///
/// Kept distinct from a clean negative answer: a failed lookup is never a
/// permission denial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure(pub String);

impl LookupFailure {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lookup failed: {}", self.0)
    }
}

impl std::error::Error for LookupFailure {}

/// Error raised while building or packaging a community operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunityError {
    DuplicateEntity(String),
    InvalidArgument(String),
    /// `(gate, account)`
    PermissionDenied(String, String),
    ParseError(String),
    LookupFailure(String),
}

impl std::fmt::Display for CommunityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEntity(msg) => write!(f, "duplicate entity: {msg}"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::PermissionDenied(gate, acc) => {
                write!(f, "Permission denied: {gate} by {acc}")
            }
            Self::ParseError(msg) => write!(f, "parse error: {msg}"),
            Self::LookupFailure(msg) => write!(f, "lookup failed: {msg}"),
        }
    }
}

impl std::error::Error for CommunityError {}

impl From<LookupFailure> for CommunityError {
    fn from(err: LookupFailure) -> Self {
        Self::LookupFailure(err.0)
    }
}

impl From<serde_json::Error> for CommunityError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
