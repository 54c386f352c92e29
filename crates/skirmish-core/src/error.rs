use thiserror::Error;

/// Errors that can occur while resolving combat arithmetic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CombatError {
    #[error("tick rate must be a positive, finite number of seconds (got {0})")]
    InvalidTickRate(f64),
}
