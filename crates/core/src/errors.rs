use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid booking state: {0}")]
    InvalidState(String),

    #[error("Rental policy violation: {0}")]
    PolicyViolation(String),

    #[error("External service failure: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Config(#[from] eyre::Report),
}

impl BookingError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
