//! Flat, serializable design response.

use serde::Serialize;
use sf_solver::ScrubberResult;

use crate::request::DesignRequest;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveSection {
    /// "Z", "eta", or "L".
    pub mode: String,
    /// Resolved unknown: meters, removal fraction, or kg/s per mode.
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GasSection {
    pub mixture_molar_mass_g_mol: f64,
    pub density_kg_m3: f64,
    pub molar_flow_mol_s: f64,
    pub liquid_molar_flow_mol_s: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSection {
    pub diameter_m: f64,
    pub diameter_mm: f64,
    pub area_m2: f64,
    pub packed_height_m: f64,
    pub hetp_height_m: f64,
    pub flooding_velocity_m_s: f64,
    pub design_velocity_m_s: f64,
    pub flooding_fraction: f64,
    pub flow_parameter: f64,
    pub dp_per_m_pa: f64,
    pub dp_total_pa: f64,
    pub dp_total_mbar: f64,
    pub liquid_load_m_s: f64,
    pub min_wetting_rate_m_s: f64,
    pub wetting_adequate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesSection {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub henry_at_t_pa: f64,
    pub enhancement_factor: f64,
    pub m_slope: f64,
    pub absorption_factor: f64,
    pub kg_a_per_s: f64,
    pub kl_a_effective_per_s: f64,
    pub h_og_m: f64,
    pub ntu: f64,
    pub required_height_m: f64,
    pub removal_target_pct: f64,
    pub removal_capped: bool,
    pub removal_achieved_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExitSection {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub inlet_mol_pct: f64,
    pub outlet_mol_pct: f64,
    pub removal_pct: f64,
    pub absorbed_mol_s: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinesSection {
    pub x_eq: Vec<f64>,
    pub y_eq: Vec<f64>,
    pub x_op: Vec<f64>,
    pub y_op: Vec<f64>,
    pub x_in: f64,
    pub x_out: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignResponse {
    pub solvent: String,
    pub packing: String,
    pub temperature_c: f64,
    pub pressure_bar: f64,

    pub solve: SolveSection,
    pub gas: GasSection,
    pub column: ColumnSection,

    pub controlling_species: String,
    pub target_removal_pct: f64,
    pub liquid_flow_kg_s: f64,

    pub species: Vec<SpeciesSection>,
    pub exit_gas: Vec<ExitSection>,
    pub total_absorbed_mol_s: f64,

    pub lines: LinesSection,
}

impl DesignResponse {
    pub fn new(request: &DesignRequest, result: &ScrubberResult) -> Self {
        let diameter_m = result.geometry.diameter.value;
        Self {
            solvent: result.solvent.clone(),
            packing: result.packing.clone(),
            temperature_c: request.temperature_c,
            pressure_bar: request.pressure_bar,
            solve: SolveSection {
                mode: result.solve.mode.symbol().to_string(),
                value: result.solve.value,
                iterations: result.solve.iterations,
                converged: result.solve.converged,
            },
            gas: GasSection {
                mixture_molar_mass_g_mol: result.mixture_molar_mass,
                density_kg_m3: result.gas_density,
                molar_flow_mol_s: result.gas_molar_flow,
                liquid_molar_flow_mol_s: result.liquid_molar_flow,
            },
            column: ColumnSection {
                diameter_m,
                diameter_mm: diameter_m * 1000.0,
                area_m2: result.geometry.area.value,
                packed_height_m: result.packed_height.value,
                hetp_height_m: result.hetp_height,
                flooding_velocity_m_s: result.geometry.flooding_velocity.value,
                design_velocity_m_s: result.geometry.design_velocity.value,
                flooding_fraction: request.flooding_fraction,
                flow_parameter: result.geometry.flow_parameter,
                dp_per_m_pa: result.geometry.dp_per_height,
                dp_total_pa: result.geometry.dp_total,
                dp_total_mbar: result.geometry.dp_total / 100.0,
                liquid_load_m_s: result.geometry.liquid_load,
                min_wetting_rate_m_s: result.geometry.min_wetting_rate,
                wetting_adequate: result.geometry.wetting_adequate,
            },
            controlling_species: result.controlling_species.clone(),
            target_removal_pct: result.target_removal_achieved * 100.0,
            liquid_flow_kg_s: result.liquid_flow.value,
            species: result
                .species
                .iter()
                .map(|s| SpeciesSection {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    formula: s.formula.clone(),
                    henry_at_t_pa: s.henry_at_t,
                    enhancement_factor: s.enhancement_factor,
                    m_slope: s.m_slope,
                    absorption_factor: s.absorption_factor,
                    kg_a_per_s: s.kg_a,
                    kl_a_effective_per_s: s.kl_a_effective,
                    h_og_m: s.h_og,
                    ntu: s.ntu,
                    required_height_m: s.required_height,
                    removal_target_pct: s.removal_target * 100.0,
                    removal_capped: s.removal_capped,
                    removal_achieved_pct: s.removal_achieved * 100.0,
                })
                .collect(),
            exit_gas: result
                .exit_gas
                .iter()
                .map(|e| ExitSection {
                    id: e.id.clone(),
                    name: e.name.clone(),
                    formula: e.formula.clone(),
                    inlet_mol_pct: e.inlet_mole_fraction * 100.0,
                    outlet_mol_pct: e.outlet_mole_fraction * 100.0,
                    removal_pct: e.removal_fraction * 100.0,
                    absorbed_mol_s: e.absorbed_molar_rate,
                })
                .collect(),
            total_absorbed_mol_s: result.total_absorbed,
            lines: LinesSection {
                x_eq: result.lines.x_eq.clone(),
                y_eq: result.lines.y_eq.clone(),
                x_op: result.lines.x_op.clone(),
                y_op: result.lines.y_op.clone(),
                x_in: result.lines.x_in,
                x_out: result.lines.x_out,
            },
        }
    }
}
