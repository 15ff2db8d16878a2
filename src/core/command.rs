use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    Network {
        message: String,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Storage { message, reason_code } => {
                CommandError::Storage { message, reason_code }
            }
            LibraryError::StorageCorrupt { message } => {
                CommandError::Storage { message, reason_code: Some("corrupt".to_string()) }
            }
            LibraryError::Network { message, retryable } => {
                CommandError::Network { message, retryable }
            }
            LibraryError::RemoteRejected { message, status } => {
                CommandError::Network { message, retryable: status >= 500 }
            }
            LibraryError::ConsistencyGap { message } => {
                CommandError::Runtime { message, reason_code: Some("consistency_gap".to_string()) }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_convert_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::storage_corrupt("test")), CommandError::Storage{ message: _, reason_code: Some(_) }));
        assert!(matches!(CommandError::from(LibraryError::remote_rejected("test", 503)), CommandError::Network{ message: _, retryable: true }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound{ message: _ }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation{ message: _, reason_code: None }));
        assert!(matches!(CommandError::from(LibraryError::consistency_gap("test")), CommandError::Runtime{ message: _, reason_code: Some(_) }));
    }
}
