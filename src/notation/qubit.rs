//! Single-qubit ket notation.
use super::vector::format_complex;
use super::NotationStyle;
use crate::core::complex::Complex;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Ket for the state at (θ, φ), e.g. `|0⟩`, `1/√2 (|0⟩ + i|1⟩)` or
/// `(0.92|0⟩ + e^(i0.79)0.38|1⟩)`.
pub fn render_qubit(theta: f64, phi: f64) -> String {
    render_qubit_with(theta, phi, &NotationStyle::default())
}

pub fn render_qubit_with(theta: f64, phi: f64, style: &NotationStyle) -> String {
    if theta.abs() < style.tolerance {
        return "|0⟩".into();
    }
    // A full turn is no phase at all.
    let phi = if style.near(phi, TAU) { 0.0 } else { phi };

    if style.near(theta, PI) && phi.abs() < style.tolerance {
        return "|1⟩".into();
    }

    if style.near(theta, FRAC_PI_2) {
        let canonical = if phi.abs() < style.tolerance {
            Some("1/√2 (|0⟩ + |1⟩)")
        } else if style.near(phi, PI) {
            Some("1/√2 (|0⟩ - |1⟩)")
        } else if style.near(phi, FRAC_PI_2) {
            Some("1/√2 (|0⟩ + i|1⟩)")
        } else if style.near(phi, -FRAC_PI_2) || style.near(phi, 3.0 * FRAC_PI_2) {
            Some("1/√2 (|0⟩ - i|1⟩)")
        } else {
            None
        };
        if let Some(ket) = canonical {
            return ket.into();
        }
    }

    let (sin, cos) = (theta / 2.0).sin_cos();
    let alpha = format_amplitude_with(cos, style);
    let beta = format_amplitude_with(sin, style);
    format!("({alpha}|0⟩ + {}{beta}|1⟩)", phase_prefix(phi, style))
}

/// Prefix that carries the relative phase in front of β.
fn phase_prefix(phi: f64, style: &NotationStyle) -> String {
    if phi.abs() < style.tolerance {
        String::new()
    } else if style.near(phi, FRAC_PI_2) {
        "i".into()
    } else if style.near(phi, 3.0 * FRAC_PI_2) || style.near(phi, -FRAC_PI_2) {
        "-i".into()
    } else if style.near(phi, PI) {
        "- ".into()
    } else {
        format!("e^(i{phi:.prec$})", prec = style.ket_decimals)
    }
}

/// Symbolic form of a real amplitude. Exact 1 disappears; the common
/// surds keep a trailing space so they read as a coefficient.
pub fn format_amplitude(value: f64) -> String {
    format_amplitude_with(value, &NotationStyle::default())
}

fn format_amplitude_with(value: f64, style: &NotationStyle) -> String {
    if style.near(value, 1.0) {
        String::new()
    } else if style.near(value * value, 0.5) {
        "1/√2 ".into()
    } else if style.near(value, 0.5) {
        "1/2 ".into()
    } else if style.near(value, 3f64.sqrt() / 2.0) {
        "√3/2 ".into()
    } else {
        format!("{value:.prec$}", prec = style.ket_decimals)
    }
}

/// Worked numbers for one qubit: its amplitudes and both angles in radians
/// and degrees, one item per line.
pub fn render_qubit_calculation(theta: f64, phi: f64) -> String {
    let style = NotationStyle::default();
    let (sin, cos) = (theta / 2.0).sin_cos();
    let alpha = Complex::real(cos);
    let beta = Complex::from_polar(sin, phi);
    format!(
        "|ψ⟩ = {}|0⟩ + {}|1⟩\nθ = {:.3} rad ({:.1}°)\nφ = {:.3} rad ({:.1}°)",
        format_complex(alpha, &style),
        format_complex(beta, &style),
        theta,
        theta.to_degrees(),
        phi,
        phi.to_degrees(),
    )
}
