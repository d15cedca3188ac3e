use std::fmt;

/// Errors raised when configuring a maze generator.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// Wall density outside the supported range.
    InvalidDensity(f64),
    /// `max_attempts` must be at least 1.
    NoAttempts,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity(d) => write!(
                f,
                "maze: density {d} outside [{}, {}]",
                crate::MazeConfig::MIN_DENSITY,
                crate::MazeConfig::MAX_DENSITY
            ),
            Self::NoAttempts => write!(f, "maze: max_attempts must be at least 1"),
        }
    }
}

impl std::error::Error for MazeError {}
