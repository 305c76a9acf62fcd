use std::fmt;

/// Why a launch payload was not accepted.
///
/// Only for logs and counters. Every variant maps to the same
/// "not authenticated" outcome at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// No `hash` field, or an empty one
    MissingHash,
    /// Recomputed signature differs from the `hash` field
    SignatureMismatch,
    /// Signature matched but there is no `user` field
    MissingUser,
    /// Signature matched but `user` is not a JSON object with an integer `id`
    MalformedUser,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingHash => "missing_hash",
            Self::SignatureMismatch => "signature_mismatch",
            Self::MissingUser => "missing_user",
            Self::MalformedUser => "malformed_user",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
