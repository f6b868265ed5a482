//! Design problem description.

use std::fmt;

use sf_column::GasMixture;
use sf_core::units::{Density, DynVisc, Length, MassRate, Pressure, Temperature, kgpm3, pas};

/// Operating point shared by every trial evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    pub temperature: Temperature,
    pub pressure: Pressure,
    /// Design gas velocity as a fraction of flooding, in (0, 1).
    pub flooding_fraction: f64,
}

/// Bulk liquid properties of the solvent stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidProperties {
    pub density: Density,
    pub viscosity: DynVisc,
    /// Surface tension [N/m].
    pub surface_tension: f64,
}

impl LiquidProperties {
    /// Water-like defaults near ambient.
    pub fn water() -> Self {
        Self { density: kgpm3(998.0), viscosity: pas(1.0e-3), surface_tension: 0.072 }
    }
}

impl Default for LiquidProperties {
    fn default() -> Self {
        Self::water()
    }
}

/// Which of {L, η, Z} is unknown; the other two ride along as fixed inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignObjective {
    /// Z unknown: find the packed height meeting a removal target.
    SolveForHeight { liquid_flow: MassRate, removal_target: f64 },
    /// η unknown: find the removal an existing column achieves.
    SolveForRemoval { liquid_flow: MassRate, packed_height: Length },
    /// L unknown: find the solvent flow meeting a removal target in a
    /// given height.
    SolveForFlow { removal_target: f64, packed_height: Length },
}

impl DesignObjective {
    pub fn mode(&self) -> SolveMode {
        match self {
            Self::SolveForHeight { .. } => SolveMode::PackedHeight,
            Self::SolveForRemoval { .. } => SolveMode::Removal,
            Self::SolveForFlow { .. } => SolveMode::LiquidFlow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveMode {
    PackedHeight,
    Removal,
    LiquidFlow,
}

impl SolveMode {
    /// Short symbol used at the API boundary.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::PackedHeight => "Z",
            Self::Removal => "eta",
            Self::LiquidFlow => "L",
        }
    }
}

impl fmt::Display for SolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Complete, validated-on-solve design problem.
#[derive(Debug, Clone)]
pub struct DesignSpec {
    pub mixture: GasMixture,
    pub solvent: String,
    pub packing: String,
    /// Acid-gas species the removal target refers to.
    pub target_species: String,
    pub gas_flow: MassRate,
    pub conditions: OperatingConditions,
    pub liquid: LiquidProperties,
    pub objective: DesignObjective,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::units::{kgps, m};

    #[test]
    fn objective_reports_its_mode() {
        let height = DesignObjective::SolveForHeight { liquid_flow: kgps(3.0), removal_target: 0.9 };
        let removal = DesignObjective::SolveForRemoval { liquid_flow: kgps(3.0), packed_height: m(2.0) };
        let flow = DesignObjective::SolveForFlow { removal_target: 0.9, packed_height: m(2.0) };
        assert_eq!(height.mode(), SolveMode::PackedHeight);
        assert_eq!(removal.mode(), SolveMode::Removal);
        assert_eq!(flow.mode(), SolveMode::LiquidFlow);
        assert_eq!(height.mode().symbol(), "Z");
        assert_eq!(removal.mode().to_string(), "eta");
        assert_eq!(flow.mode().symbol(), "L");
    }

    #[test]
    fn water_defaults_are_ambient() {
        let liquid = LiquidProperties::default();
        assert!((liquid.density.value - 998.0).abs() < 1e-9);
        assert!((liquid.viscosity.value - 1.0e-3).abs() < 1e-12);
        assert!((liquid.surface_tension - 0.072).abs() < 1e-12);
    }
}
