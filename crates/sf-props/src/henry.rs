//! Henry's-law constants with van't Hoff temperature correction.
//!
//! Convention: P_i = H_i · x_i, so H has units of pressure and *rises*
//! with temperature for exothermic dissolution (gases get less soluble
//! in warmer solvent).

use sf_core::units::constants::R_GAS;

/// Henry's-law constant at a reference temperature plus the dissolution
/// enthalpy needed to move it to operating temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HenryConstant {
    /// Henry's constant at `t_ref` [Pa].
    pub h_ref: f64,
    /// Enthalpy of dissolution [J/mol]; negative for exothermic.
    pub dh_solution: f64,
    /// Reference temperature [K].
    pub t_ref: f64,
}

impl HenryConstant {
    pub const fn new(h_ref: f64, dh_solution: f64) -> Self {
        Self {
            h_ref,
            dh_solution,
            t_ref: 298.15,
        }
    }

    /// H(T) = H_ref · exp(−ΔH_sol/R · (1/T_ref − 1/T))
    pub fn at_temperature(&self, t_kelvin: f64) -> f64 {
        self.h_ref * (-self.dh_solution / R_GAS * (1.0 / self.t_ref - 1.0 / t_kelvin)).exp()
    }
}
