//! Circuit program model.
//!
//! Pipeline: placed gates → sort by position → pair two-qubit markers →
//! engine gates → state vector.
//!
//! - `placed`: entries of an editable program (wire, position, op)
//! - `program`: compiling a program into engine gates and a state
//! - `session`: `Circuit`, the editable program plus its compiled state
//! - `lexer` / `parser`: the line-oriented circuit script format
pub mod lexer;
pub mod parser;
pub mod placed;
pub mod program;
pub mod session;

pub use parser::parse_script;
pub use placed::{CnotRole, GateId, PlacedGate, PlacedOp};
pub use program::{compile, compile_steps};
pub use session::{degrees_to_radians, Circuit, CircuitSnapshot};
