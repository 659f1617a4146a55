//! Step-by-step calculation walkthrough for a circuit.
//!
//! ```text
//! Initial Qubit State:
//! [1, 0] ⊗ [1, 0]
//!
//! Gate Operations (Right-to-Left):
//! (H ⊗ I) · |ψ₀⟩
//!
//! CNOT Gates:
//! CNOT(control: q1, target: q2)
//!
//! Final State Vector:
//! |ψ⟩ = (0.707)|00⟩ + (0.707)|11⟩
//! ```
//!
//! Qubit labels in this panel are 1-based.
use super::vector::render_state_vector_with;
use super::NotationStyle;
use crate::circuit::Circuit;
use crate::core::gates::Gate;
use std::fmt::Write;

pub fn details(circuit: &Circuit, style: &NotationStyle) -> String {
    let n = circuit.qubit_count();
    let mut stacks: Vec<Vec<String>> = vec![Vec::new(); n];
    let mut cnots = Vec::new();
    let mut swaps = Vec::new();

    for step in circuit.steps() {
        match step {
            // Latest gate first: the product reads right to left.
            Gate::Single { qubit, gate } => stacks[qubit].insert(0, gate.to_string()),
            Gate::Cnot { control, target } => {
                cnots.push(format!("CNOT(control: q{}, target: q{})", control + 1, target + 1))
            }
            Gate::Swap { a, b } => swaps.push(format!("SWAP(q{}, q{})", a + 1, b + 1)),
        }
    }

    let terms: Vec<String> = stacks
        .iter()
        .map(|stack| if stack.is_empty() { "I".to_string() } else { stack.join(" × ") })
        .collect();

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Initial Qubit State:\n{}\n", vec!["[1, 0]"; n].join(" ⊗ "));
    let _ = writeln!(out, "Gate Operations (Right-to-Left):\n({}) · |ψ₀⟩\n", terms.join(" ⊗ "));
    for (title, lines) in [("CNOT Gates:", &cnots), ("SWAP Gates:", &swaps)] {
        if !lines.is_empty() {
            let _ = writeln!(out, "{title}\n{}\n", lines.join("\n"));
        }
    }
    let _ = write!(out, "Final State Vector:\n{}", render_state_vector_with(circuit.state(), style));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gates::{Axis, SingleQubitGate};

    #[test]
    fn test_bell_details() {
        let mut c = Circuit::new(2).unwrap();
        c.add_gate(10.0, 0, SingleQubitGate::H).unwrap();
        c.add_cnot(20.0, 0, 1).unwrap();
        let expected = "Initial Qubit State:\n[1, 0] ⊗ [1, 0]\n\n\
                        Gate Operations (Right-to-Left):\n(H ⊗ I) · |ψ₀⟩\n\n\
                        CNOT Gates:\nCNOT(control: q1, target: q2)\n\n\
                        Final State Vector:\n|ψ⟩ = (0.707)|00⟩ + (0.707)|11⟩";
        assert_eq!(details(&c, &NotationStyle::default()), expected);
    }

    #[test]
    fn test_gate_stack_latest_first() {
        let mut c = Circuit::new(1).unwrap();
        c.add_gate(10.0, 0, SingleQubitGate::H).unwrap();
        c.add_rotation_degrees(20.0, 0, Axis::X, 90.0).unwrap();
        c.add_gate(30.0, 0, SingleQubitGate::Z).unwrap();
        let text = c.details();
        assert!(text.contains("(Z × RX(90°) × H) · |ψ₀⟩"));
        assert!(!text.contains("CNOT Gates:"));
        assert!(!text.contains("SWAP Gates:"));
    }

    #[test]
    fn test_swap_section() {
        let mut c = Circuit::new(3).unwrap();
        c.add_swap(10.0, 0, 2).unwrap();
        let text = c.details();
        assert!(text.contains("SWAP Gates:\nSWAP(q1, q3)\n"));
        assert!(text.contains("(I ⊗ I ⊗ I) · |ψ₀⟩"));
    }

    #[test]
    fn test_unpaired_marker_not_listed() {
        let mut c = Circuit::new(2).unwrap();
        let (control, _) = c.add_cnot(10.0, 0, 1).unwrap();
        c.add_cnot(20.0, 1, 0).unwrap();
        c.remove(control).unwrap();
        assert!(c.details().contains("CNOT(control: q2, target: q1)"));
        assert!(!c.details().contains("control: q1"));
    }
}
