use serde::Serialize;
use std::fmt::Display;

// ============================================================================
// Outcome - Uniform Result Contract
// ============================================================================
//
// Every core operation past construction answers with an Outcome instead of
// an error: callers branch on `succeeded` and surface `message` as-is.
//
// ============================================================================

/// Structured result of a core operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub succeeded: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            data: None,
        }
    }

    /// Failed outcome carrying the error's display text as message
    pub fn from_error<E: Display>(error: E) -> Self {
        Self::failure(error.to_string())
    }

    /// Build an outcome from a fallible step, using `message` on success
    pub fn from_result<E: Display>(result: Result<T, E>, message: impl Into<String>) -> Self {
        match result {
            Ok(data) => Self::success(message, data),
            Err(error) => Self::from_error(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.succeeded
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            succeeded: self.succeeded,
            message: self.message,
            data: self.data.map(f),
        }
    }

    /// Convert back into a `Result`, the failure side being the message
    pub fn into_result(self) -> Result<T, String> {
        match (self.succeeded, self.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => Err(self.message),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
