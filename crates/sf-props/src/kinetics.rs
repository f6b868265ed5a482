//! Reactive-absorption kinetics data.
//!
//! Enhancement factors are engineering approximations tabulated as
//! configuration data; no reaction chemistry is modeled beyond them.

/// Per gas-solvent pair: reaction enhancement and diffusivities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsorptionKinetics {
    /// Reaction enhancement factor E ≥ 1 (1 = purely physical).
    pub enhancement_factor: f64,
    /// Gas-phase diffusion coefficient [m²/s].
    pub diff_gas: f64,
    /// Liquid-phase diffusion coefficient [m²/s].
    pub diff_liquid: f64,
}

impl AbsorptionKinetics {
    /// Physical absorption with generic small-molecule diffusivities.
    pub const PHYSICAL: AbsorptionKinetics = AbsorptionKinetics {
        enhancement_factor: 1.0,
        diff_gas: 1.5e-5,
        diff_liquid: 1.5e-9,
    };
}

impl Default for AbsorptionKinetics {
    fn default() -> Self {
        Self::PHYSICAL
    }
}
