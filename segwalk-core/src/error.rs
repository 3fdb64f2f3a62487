use thiserror::Error;

/// Precondition violations raised by an environment step. None of these are recoverable, they
/// signal that the caller drove the environment into a state it does not define.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    #[error("action {action} is not in the discrete action space of size {size}")]
    InvalidAction { action: usize, size: usize },
    #[error("observation {observation} is not in the discrete observation space of size {size}")]
    ObservationOutOfRange { observation: usize, size: usize },
    #[error("expected an action space of size {expected}, found {actual}")]
    ActionSpaceSize { expected: usize, actual: usize },
    #[error("cannot step from terminal position {position}")]
    TerminalState { position: usize },
    #[error("{0} is not a valid probability")]
    InvalidProbability(f64),
}
