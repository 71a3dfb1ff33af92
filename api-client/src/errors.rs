use std::fmt::Display;

/// Enum representing the possible errors that can occur when talking to the
/// backend.
///
/// The possible errors are:
///
/// - `Status`: the backend answered with a non-success HTTP status.
/// - `Transport`: the request never completed (connection refused, timeout).
/// - `Decode`: the response body could not be parsed into the expected shape.
///
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Status(u16),
    Transport(String),
    Decode(String),
}

impl ApiError {
    /// Whether the backend explicitly reported the requested resource as
    /// missing, as opposed to the request itself breaking.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status(404))
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status(code) => {
                write!(f, "[Status]: [The backend answered with status {}]", code)
            }
            ApiError::Transport(detail) => write!(f, "[Transport]: [{}]", detail),
            ApiError::Decode(detail) => write!(f, "[Decode]: [{}]", detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_a_404_counts_as_not_found() {
        assert!(ApiError::Status(404).is_not_found());
        assert!(!ApiError::Status(500).is_not_found());
        assert!(!ApiError::Transport("connection refused".to_string()).is_not_found());
    }
}
