//! Design request deserialization and validation.

use serde::{Deserialize, Serialize};
use sf_column::GasMixture;
use sf_core::units::{bar, celsius, kgps, kgpm3, m, pas};
use sf_props::PropertyStore;
use sf_solver::{DesignObjective, DesignSpec, LiquidProperties, OperatingConditions};

use crate::error::{ApiError, ApiResult};

/// One gas-mixture entry; percents must total 100 ± 0.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasComponent {
    pub species: String,
    pub mole_percent: f64,
}

/// Optional liquid-property overrides; water-like defaults otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidSpec {
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
    pub surface_tension_n_m: f64,
}

impl Default for LiquidSpec {
    fn default() -> Self {
        Self { density_kg_m3: 998.0, viscosity_pa_s: 1.0e-3, surface_tension_n_m: 0.072 }
    }
}

/// Which design variable the solver should find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveFor {
    #[serde(rename = "Z")]
    PackedHeight,
    #[serde(rename = "eta")]
    Removal,
    #[serde(rename = "L")]
    LiquidFlow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignRequest {
    pub gas_mixture: Vec<GasComponent>,
    pub solvent_name: String,
    pub packing_name: String,
    pub target_species: String,
    #[serde(default = "defaults::gas_flow")]
    pub gas_flow_kg_s: f64,
    pub temperature_c: f64,
    pub pressure_bar: f64,
    #[serde(default = "defaults::flooding_fraction")]
    pub flooding_fraction: f64,
    pub solve_for: SolveFor,
    /// Fixed inputs: exactly the two matching `solve_for`'s complement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_flow_kg_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removal_target_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packed_height_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid: Option<LiquidSpec>,
}

mod defaults {
    pub fn gas_flow() -> f64 {
        1.0
    }

    pub fn flooding_fraction() -> f64 {
        0.70
    }
}

impl DesignRequest {
    /// Validate the request shape and resolve it into a solver spec.
    pub fn to_spec(&self, store: &dyn PropertyStore) -> ApiResult<DesignSpec> {
        let objective = self.objective()?;

        let entries: Vec<(&str, f64)> = self
            .gas_mixture
            .iter()
            .map(|c| (c.species.as_str(), c.mole_percent))
            .collect();
        let mixture = GasMixture::from_mole_percents(store, &entries)?;

        let liquid = self.liquid.unwrap_or_default();
        Ok(DesignSpec {
            mixture,
            solvent: self.solvent_name.clone(),
            packing: self.packing_name.clone(),
            target_species: self.target_species.clone(),
            gas_flow: kgps(self.gas_flow_kg_s),
            conditions: OperatingConditions {
                temperature: celsius(self.temperature_c),
                pressure: bar(self.pressure_bar),
                flooding_fraction: self.flooding_fraction,
            },
            liquid: LiquidProperties {
                density: kgpm3(liquid.density_kg_m3),
                viscosity: pas(liquid.viscosity_pa_s),
                surface_tension: liquid.surface_tension_n_m,
            },
            objective,
        })
    }

    /// Enforce the two-of-three pairing and build the tagged objective.
    fn objective(&self) -> ApiResult<DesignObjective> {
        match self.solve_for {
            SolveFor::PackedHeight => {
                self.forbid(self.packed_height_m, "packed_height_m", "Z")?;
                Ok(DesignObjective::SolveForHeight {
                    liquid_flow: kgps(self.require(self.liquid_flow_kg_s, "liquid_flow_kg_s")?),
                    removal_target: self.removal_fraction()?,
                })
            }
            SolveFor::Removal => {
                self.forbid(self.removal_target_pct, "removal_target_pct", "eta")?;
                Ok(DesignObjective::SolveForRemoval {
                    liquid_flow: kgps(self.require(self.liquid_flow_kg_s, "liquid_flow_kg_s")?),
                    packed_height: m(self.require(self.packed_height_m, "packed_height_m")?),
                })
            }
            SolveFor::LiquidFlow => {
                self.forbid(self.liquid_flow_kg_s, "liquid_flow_kg_s", "L")?;
                Ok(DesignObjective::SolveForFlow {
                    removal_target: self.removal_fraction()?,
                    packed_height: m(self.require(self.packed_height_m, "packed_height_m")?),
                })
            }
        }
    }

    fn require(&self, field: Option<f64>, name: &str) -> ApiResult<f64> {
        field.ok_or_else(|| {
            ApiError::validation(format!("'{name}' is required when solve_for is '{}'", self.symbol()))
        })
    }

    fn forbid(&self, field: Option<f64>, name: &str, mode: &str) -> ApiResult<()> {
        if field.is_some() {
            return Err(ApiError::validation(format!(
                "'{name}' must be omitted when solve_for is '{mode}' (it is the unknown)"
            )));
        }
        Ok(())
    }

    fn removal_fraction(&self) -> ApiResult<f64> {
        let pct = self.require(self.removal_target_pct, "removal_target_pct")?;
        if !pct.is_finite() || !(pct > 0.0 && pct < 100.0) {
            return Err(ApiError::validation(format!(
                "removal_target_pct must be in (0, 100), got {pct}"
            )));
        }
        Ok(pct / 100.0)
    }

    fn symbol(&self) -> &'static str {
        match self.solve_for {
            SolveFor::PackedHeight => "Z",
            SolveFor::Removal => "eta",
            SolveFor::LiquidFlow => "L",
        }
    }
}
