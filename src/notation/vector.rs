//! Amplitude listing of a full state vector.
use super::NotationStyle;
use crate::core::complex::Complex;
use crate::core::state::StateVector;

/// `|ψ⟩ = (0.707)|00⟩ + (0.707)|11⟩`. Amplitudes below the style tolerance
/// are left out; a vector with nothing left renders as `|ψ⟩ = 0`.
pub fn render_state_vector(state: &StateVector) -> String {
    render_state_vector_with(state, &NotationStyle::default())
}

pub fn render_state_vector_with(state: &StateVector, style: &NotationStyle) -> String {
    let terms: Vec<String> = state
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|(_, amp)| amp.norm() >= style.tolerance)
        .map(|(i, &amp)| format!("({})|{}⟩", format_complex(amp, style), state.basis_label(i)))
        .collect();

    if terms.is_empty() {
        "|ψ⟩ = 0".into()
    } else {
        format!("|ψ⟩ = {}", terms.join(" + "))
    }
}

/// `0.707`, `0.707i`, `0.500 + 0.500i` or `0.500 - 0.500i`.
pub fn format_complex(z: Complex, style: &NotationStyle) -> String {
    let prec = style.vector_decimals;
    if z.im.abs() < style.tolerance {
        format!("{:.prec$}", z.re)
    } else if z.re.abs() < style.tolerance {
        format!("{:.prec$}i", z.im)
    } else {
        let sign = if z.im >= 0.0 { '+' } else { '-' };
        format!("{:.prec$} {sign} {:.prec$}i", z.re, z.im.abs())
    }
}
