//! Error type shared by the circuit session, the script front end and
//! config loading.
//!
//! Numerical degeneracy never shows up here: a zero amplitude or a NaN angle
//! is replaced by a documented default inside the core. Only input that is
//! rejected at the boundary becomes an `Error`.
use crate::circuit::GateId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Qubit count outside `1..=max`.
    #[error("qubit count {requested} is outside 1..={max}")]
    QubitCount { requested: usize, max: usize },

    /// A gate was placed on a wire the circuit does not have.
    #[error("qubit {qubit} does not exist in a {qubit_count}-qubit circuit")]
    QubitOutOfRange { qubit: usize, qubit_count: usize },

    /// Rotation angle not a number in [0, 360] degrees.
    #[error("rotation angle {degrees}° is outside 0–360")]
    InvalidAngle { degrees: f64 },

    /// Both ends of a two-qubit gate on one wire.
    #[error("two-qubit gate needs two different qubits, got q{qubit} twice")]
    SameQubit { qubit: usize },

    /// Two-qubit gate requested on a single-qubit circuit.
    #[error("two-qubit gates need at least 2 qubits")]
    NeedsTwoQubits,

    #[error("no gate with id {0} in the circuit")]
    UnknownGate(GateId),

    #[error("lex error line {line}: {msg}")]
    Lex { line: usize, msg: String },

    #[error("parse error line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn lex(line: usize, msg: impl Into<String>) -> Self {
        Self::Lex { line, msg: msg.into() }
    }

    pub(crate) fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse { line, msg: msg.into() }
    }

    /// Source line for script errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Lex { line, .. } | Self::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}
