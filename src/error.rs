use thiserror::Error;

/// Failures a front desk operation can report.
///
/// The display text of each variant is the status line shown on the form, so
/// the command layer can hand it straight back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeskError {
    /// Missing or malformed input; the user can correct it and retry.
    #[error("{0}")]
    Validation(String),
    /// The referenced room or reservation does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The room already carries an active reservation.
    #[error("{0}")]
    Conflict(String),
    /// Reading or writing persisted state failed.
    #[error("{0}")]
    Io(String),
}

impl DeskError {
    pub fn validation<M: Into<String>>(msg: M) -> Self {
        DeskError::Validation(msg.into())
    }

    pub fn not_found<M: Into<String>>(msg: M) -> Self {
        DeskError::NotFound(msg.into())
    }

    pub fn conflict<M: Into<String>>(msg: M) -> Self {
        DeskError::Conflict(msg.into())
    }

    pub fn io<M: Into<String>>(msg: M) -> Self {
        DeskError::Io(msg.into())
    }
}

pub type DeskResult<T> = Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::DeskError;

    #[test]
    fn display_is_the_status_text() {
        assert_eq!(
            DeskError::conflict("Room is already booked.").to_string(),
            "Room is already booked."
        );
        assert_eq!(
            DeskError::not_found("Room not found.").to_string(),
            "Room not found."
        );
    }
}
