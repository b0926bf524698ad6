use thiserror::Error;

/// Defines the failures reported by the analytical solutions
///
/// Invalid input is reported before any computation starts; non-convergence is a
/// failure of the root finding for otherwise valid input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum InterfaceError {
    /// A documented precondition has been violated (e.g., x > 0 for the inverse solution)
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A required root-finding did not converge within its bracket or iteration budget
    #[error("non-convergence: {0}")]
    NonConvergence(&'static str),

    /// The query has no closed form for the active regime
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl InterfaceError {
    /// Returns the message without the kind prefix
    pub fn message(&self) -> &'static str {
        match self {
            InterfaceError::InvalidInput(msg) => msg,
            InterfaceError::NonConvergence(msg) => msg,
            InterfaceError::NotImplemented(msg) => msg,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::InterfaceError;

    #[test]
    fn display_and_message_work() {
        let err = InterfaceError::InvalidInput("x must be ≤ 0");
        assert_eq!(format!("{}", err), "invalid input: x must be ≤ 0");
        assert_eq!(err.message(), "x must be ≤ 0");
        let err = InterfaceError::NonConvergence("atr was not found");
        assert_eq!(format!("{}", err), "non-convergence: atr was not found");
        let err = InterfaceError::NotImplemented("head is only available for case 1");
        assert_eq!(format!("{}", err), "not implemented: head is only available for case 1");
        assert_ne!(
            InterfaceError::InvalidInput("a"),
            InterfaceError::NonConvergence("a")
        );
    }
}
