//! Operating and equilibrium line data for x-y diagrams.

/// Sampled operating and equilibrium lines for the controlling solute.
///
/// Assumes clean solvent at the top (x_out = 0). The equilibrium line
/// extends 20% past the richer of x_in and y_in/m so the pinch is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingLines {
    pub x_eq: Vec<f64>,
    pub y_eq: Vec<f64>,
    pub x_op: Vec<f64>,
    pub y_op: Vec<f64>,
    /// Rich liquid composition at the bottom.
    pub x_in: f64,
    /// Lean liquid composition at the top.
    pub x_out: f64,
}

pub const DEFAULT_LINE_POINTS: usize = 51;

/// Sample both lines over `n_points` points.
pub fn operating_equilibrium_lines(
    y_in: f64,
    y_out: f64,
    m: f64,
    a: f64,
    n_points: usize,
) -> OperatingLines {
    let n = n_points.max(2);
    let l_over_g = m * a;
    let x_out = 0.0;
    let x_in = if l_over_g > 0.0 { (y_in - y_out) / l_over_g } else { 0.0 };
    let x_max = if m > 0.0 {
        (x_in * 1.2).max(y_in / m * 1.2)
    } else {
        x_in * 1.2
    };

    let step = 1.0 / (n - 1) as f64;
    let x_eq: Vec<f64> = (0..n).map(|i| i as f64 * step * x_max).collect();
    let y_eq: Vec<f64> = x_eq.iter().map(|x| m * x).collect();
    let x_op: Vec<f64> = (0..n).map(|i| i as f64 * step * x_in).collect();
    let y_op: Vec<f64> = x_op.iter().map(|x| l_over_g * (x - x_out) + y_out).collect();

    OperatingLines { x_eq, y_eq, x_op, y_op, x_in, x_out }
}
