use thiserror::Error;

/// Why a farm ID was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidIdReason {
    Length,
    Character,
}

impl InvalidIdReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidIdReason::Length => "Farm ID must be 1-9 characters long!",
            InvalidIdReason::Character => "Farm ID must contain only letters and numbers!",
        }
    }
}

impl std::fmt::Display for InvalidIdReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recoverable failures of the farm registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid farm ID '{id}': {reason}")]
    InvalidId { id: String, reason: InvalidIdReason },

    #[error("Farm ID '{0}' already exists")]
    DuplicateId(String),

    #[error("Farm with ID '{0}' not found")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_reason_messages() {
        assert_eq!(
            InvalidIdReason::Length.to_string(),
            "Farm ID must be 1-9 characters long!"
        );
        assert_eq!(
            InvalidIdReason::Character.to_string(),
            "Farm ID must contain only letters and numbers!"
        );
    }

    #[test]
    fn registry_error_converts_into_scheduler_error() {
        let err: SchedulerError = RegistryError::NotFound("F1".into()).into();
        assert!(matches!(
            err,
            SchedulerError::Registry(RegistryError::NotFound(ref id)) if id == "F1"
        ));
        assert_eq!(
            err.to_string(),
            "Registry error: Farm with ID 'F1' not found"
        );
    }
}
