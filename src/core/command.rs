use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub(crate) enum CommandError {
    NotFound {
        message: String,
    },
    Other {
        message: String,
    },
}

#[async_trait]
pub(crate) trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            other => {
                CommandError::Other { message: other.to_string() }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_convert_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound{ .. }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("test")), CommandError::Other{ .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Other{ .. }));
    }
}
