use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    MalformedRequest,
    InvalidEmail,
    DuplicateEmail,
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MalformedRequest => "MALFORMED_REQUEST",
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::MalformedRequest(_) => ErrorCode::MalformedRequest,
            AppError::InvalidEmail => ErrorCode::InvalidEmail,
            AppError::DuplicateEmail => ErrorCode::DuplicateEmail,
            AppError::Database(_) => ErrorCode::DatabaseError,
        }
    }

    /// Message that is safe to show to the visitor. Never includes store detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MalformedRequest(_) => "Invalid request body",
            AppError::InvalidEmail => "Please enter a valid email address",
            AppError::DuplicateEmail => "This email is already registered",
            AppError::Database(_) => "Something went wrong. Please try again later.",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
