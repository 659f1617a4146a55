/// Circuit script parser: token statements → a compiled `Circuit`.
///
/// Grammar:
///   script     := 'QUBITS' INT gate_line*
///   gate_line  := ('@' NUMBER)? instruction
///   instruction:= ('I'|'H'|'X'|'Y'|'Z') INT
///               | ('RX'|'RY'|'RZ') INT NUMBER        // degrees
///               | ('CNOT'|'SWAP') INT INT
///
/// Syntax errors carry the offending line. Semantic errors (qubit range,
/// angle range, same-qubit pairs) come from the session and are reported
/// exactly as interactive edits would report them.
use super::lexer::{self, Spanned, Token};
use super::session::Circuit;
use crate::core::gates::{Axis, SingleQubitGate};
use crate::error::{Error, Result};
use tracing::debug;

/// Spacing used for gate lines that carry no explicit `@position`.
const DEFAULT_SPACING: f64 = 10.0;

/// Gate line operation; each variant holds exactly the wires it touches.
enum Op {
    Single(usize, SingleQubitGate),
    Rotation(usize, Axis, f64),
    Cnot(usize, usize),
    Swap(usize, usize),
}

struct GateLine {
    position: f64,
    op: Op,
}

/// Lex and parse a script, then build the circuit it describes.
pub fn parse_script(source: &str) -> Result<Circuit> {
    parse(lexer::tokenize(source)?)
}

/// Build a circuit from lexed statements.
pub fn parse(statements: Vec<Vec<Spanned>>) -> Result<Circuit> {
    let mut iter = statements.into_iter();

    let header = iter
        .next()
        .ok_or_else(|| Error::parse(1, "empty script, expected 'QUBITS <n>'"))?;
    let mut circuit = Circuit::new(parse_header(&header)?)?;

    for (ordinal, stmt) in iter.enumerate() {
        let line = parse_gate_line(&stmt, (ordinal + 1) as f64 * DEFAULT_SPACING)?;
        match line.op {
            Op::Single(qubit, gate) => {
                circuit.add_gate(line.position, qubit, gate)?;
            }
            Op::Rotation(qubit, axis, degrees) => {
                circuit.add_rotation_degrees(line.position, qubit, axis, degrees)?;
            }
            Op::Cnot(control, target) => {
                circuit.add_cnot(line.position, control, target)?;
            }
            Op::Swap(a, b) => {
                circuit.add_swap(line.position, a, b)?;
            }
        }
    }

    debug!(qubits = circuit.qubit_count(), entries = circuit.gates().len(), "parsed circuit script");
    Ok(circuit)
}

// ── Statement parsers ─────────────────────────────────────────────────────

fn parse_header(tokens: &[Spanned]) -> Result<usize> {
    let line = tokens[0].line;
    if !matches!(tokens[0].token, Token::Qubits) {
        return Err(Error::parse(line, "first statement must be 'QUBITS <n>'"));
    }
    if tokens.len() != 2 {
        return Err(Error::parse(
            line,
            format!("'QUBITS' expects 1 argument, got {}", tokens.len() - 1),
        ));
    }
    int_arg(&tokens[1])
}

fn parse_gate_line(tokens: &[Spanned], default_position: f64) -> Result<GateLine> {
    let line = tokens[0].line;

    let (position, rest) = match tokens[0].token {
        Token::At(p) => (p, &tokens[1..]),
        _ => (default_position, tokens),
    };
    let Some(head) = rest.first() else {
        return Err(Error::parse(line, "position without a gate"));
    };

    let check_argc = |expected: usize| -> Result<()> {
        if rest.len() != expected {
            Err(Error::parse(
                line,
                format!(
                    "'{}' expects {} argument(s), got {}",
                    head.token.display(),
                    expected - 1,
                    rest.len() - 1
                ),
            ))
        } else {
            Ok(())
        }
    };

    let single = |gate: SingleQubitGate| -> Result<GateLine> {
        check_argc(2)?;
        Ok(GateLine { position, op: Op::Single(int_arg(&rest[1])?, gate) })
    };
    let rotation = |axis: Axis| -> Result<GateLine> {
        check_argc(3)?;
        Ok(GateLine { position, op: Op::Rotation(int_arg(&rest[1])?, axis, deg_arg(&rest[2])?) })
    };

    match head.token {
        Token::I => single(SingleQubitGate::I),
        Token::H => single(SingleQubitGate::H),
        Token::X => single(SingleQubitGate::X),
        Token::Y => single(SingleQubitGate::Y),
        Token::Z => single(SingleQubitGate::Z),
        Token::Rx => rotation(Axis::X),
        Token::Ry => rotation(Axis::Y),
        Token::Rz => rotation(Axis::Z),
        Token::Cnot => {
            check_argc(3)?;
            let (control, target) = (int_arg(&rest[1])?, int_arg(&rest[2])?);
            Ok(GateLine { position, op: Op::Cnot(control, target) })
        }
        Token::Swap => {
            check_argc(3)?;
            let (a, b) = (int_arg(&rest[1])?, int_arg(&rest[2])?);
            Ok(GateLine { position, op: Op::Swap(a, b) })
        }
        Token::Qubits => Err(Error::parse(line, "only one 'QUBITS' declaration is allowed")),
        ref other => Err(Error::parse(
            line,
            format!("expected a gate mnemonic, got '{}'", other.display()),
        )),
    }
}

// ── Argument helpers ──────────────────────────────────────────────────────

fn int_arg(s: &Spanned) -> Result<usize> {
    match s.token {
        Token::Int(n) => Ok(n),
        _ => Err(Error::parse(
            s.line,
            format!("expected a non-negative integer, got '{}'", s.token.display()),
        )),
    }
}

/// Rotation angle in degrees; integers are promoted.
fn deg_arg(s: &Spanned) -> Result<f64> {
    match s.token {
        Token::Float(f) => Ok(f),
        Token::Int(n) => Ok(n as f64),
        _ => Err(Error::parse(
            s.line,
            format!("expected an angle in degrees, got '{}'", s.token.display()),
        )),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
