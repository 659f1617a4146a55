//! Register notation built from per-qubit factors.
use super::qubit::render_qubit_with;
use super::NotationStyle;
use crate::core::bloch::{all_bloch_angles, BlochAngles};
use crate::core::state::StateVector;

const PLUS: &str = "1/√2 (|0⟩ + |1⟩)";

/// Product notation for the register: `|010⟩` when every qubit sits on a
/// pole, otherwise the factors joined with ` ⊗ `.
pub fn render_joint(angles: &[BlochAngles]) -> String {
    render_joint_with(angles, &NotationStyle::default())
}

pub fn render_joint_with(angles: &[BlochAngles], style: &NotationStyle) -> String {
    let factors: Vec<String> = angles
        .iter()
        .map(|a| render_qubit_with(a.theta, a.phi, style))
        .collect();

    let bits: Option<String> = factors
        .iter()
        .map(|f| match f.as_str() {
            "|0⟩" => Some('0'),
            "|1⟩" => Some('1'),
            _ => None,
        })
        .collect();

    match bits {
        Some(bits) => format!("|{bits}⟩"),
        None => factors.join(" ⊗ "),
    }
}

/// Collapse a product of `|+⟩` factors into the uniform sum over all basis
/// states. Any other input is returned unchanged.
///
/// `1/√2 (|0⟩ + |1⟩) ⊗ 1/√2 (|0⟩ + |1⟩)` becomes
/// `1/2 (|00⟩ + |01⟩ + |10⟩ + |11⟩)`.
pub fn concise(notation: &str) -> String {
    let factors: Vec<&str> = notation.split('⊗').map(str::trim).collect();
    if factors.len() < 2 || factors.iter().any(|f| *f != PLUS) {
        return notation.to_string();
    }

    let n = factors.len();
    let basis: Vec<String> = (0..1usize << n).map(|i| format!("|{i:0n$b}⟩")).collect();
    format!("{} ({})", uniform_coefficient(n), basis.join(" + "))
}

/// 1/√(2^n), written without the root when 2^n is a perfect square.
fn uniform_coefficient(n: usize) -> String {
    if n % 2 == 0 {
        format!("1/{}", 1usize << (n / 2))
    } else {
        format!("1/√{}", 1usize << n)
    }
}

/// Notation for a whole state: its Bloch factors, collapsed when uniform.
pub fn render_state(state: &StateVector) -> String {
    render_state_with(state, &NotationStyle::default())
}

pub fn render_state_with(state: &StateVector, style: &NotationStyle) -> String {
    concise(&render_joint_with(&all_bloch_angles(state), style))
}
