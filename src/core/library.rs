use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    // Raised when the engine finds its own bookkeeping out of sync, e.g. a checked-out
    // item that is missing from its holder's list. This always indicates a defect in
    // the caller or the engine and is never retryable.
    Invariant {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn invariant(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Invariant { message: message.to_string(), reason_code }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Invariant { .. } => { false }
            LibraryError::Runtime { .. } => { true }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("catalog io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Invariant { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Where an item physically is. Every item starts on the shelf and cycles between the
// three states for as long as it is held by the library.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CirculationStatus {
    #[default]
    OnShelf,
    OnHoldShelf,
    CheckedOut,
}

impl From<String> for CirculationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ON_SHELF" => CirculationStatus::OnShelf,
            "ON_HOLD_SHELF" => CirculationStatus::OnHoldShelf,
            "CHECKED_OUT" => CirculationStatus::CheckedOut,
            _ => CirculationStatus::OnShelf,
        }
    }
}

impl Display for CirculationStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CirculationStatus::OnShelf => write!(f, "ON_SHELF"),
            CirculationStatus::OnHoldShelf => write!(f, "ON_HOLD_SHELF"),
            CirculationStatus::CheckedOut => write!(f, "CHECKED_OUT"),
        }
    }
}

// Result of a circulation transaction. Rejections are ordinary values that callers are
// expected to inspect; they never leave partial state behind.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TransactionOutcome {
    PatronNotFound,
    ItemNotFound,
    ItemAlreadyCheckedOut,
    ItemOnHoldByAnotherPatron,
    ItemAlreadyInLibrary,
    ItemAlreadyOnHold,
    Success,
}

impl TransactionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TransactionOutcome::Success)
    }
}

impl Display for TransactionOutcome {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TransactionOutcome::PatronNotFound => write!(f, "patron not found"),
            TransactionOutcome::ItemNotFound => write!(f, "item not found"),
            TransactionOutcome::ItemAlreadyCheckedOut => write!(f, "item already checked out"),
            TransactionOutcome::ItemOnHoldByAnotherPatron => write!(f, "item on hold by another patron"),
            TransactionOutcome::ItemAlreadyInLibrary => write!(f, "item already in library"),
            TransactionOutcome::ItemAlreadyOnHold => write!(f, "item already on hold"),
            TransactionOutcome::Success => write!(f, "success"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{CirculationStatus, LibraryError, TransactionOutcome};

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_create_invariant_error() {
        assert!(matches!(LibraryError::invariant("test", None), LibraryError::Invariant{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
        assert_eq!(false, LibraryError::invariant("test", None).retryable());
        assert_eq!(true, LibraryError::runtime("test", None).retryable());
    }

    #[test]
    fn test_should_convert_json_error() {
        let err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_format_circulation_status() {
        let statuses = vec![
            CirculationStatus::OnShelf,
            CirculationStatus::OnHoldShelf,
            CirculationStatus::CheckedOut,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = CirculationStatus::from(str);
            assert_eq!(status, str_status);
        }
        assert_eq!(CirculationStatus::OnShelf, CirculationStatus::default());
    }

    #[test]
    fn test_should_format_outcome() {
        assert_eq!("patron not found", TransactionOutcome::PatronNotFound.to_string());
        assert_eq!("item on hold by another patron", TransactionOutcome::ItemOnHoldByAnotherPatron.to_string());
        assert!(TransactionOutcome::Success.is_success());
        assert!(!TransactionOutcome::ItemAlreadyOnHold.is_success());
    }
}
