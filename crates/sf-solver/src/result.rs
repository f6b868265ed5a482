//! Solve output aggregate.
//!
//! Built once at the end of a solve and never mutated afterwards.

use sf_column::OperatingLines;
use sf_core::units::{Area, Length, MassRate, Pressure, Temperature, Velocity};

use crate::spec::SolveMode;

/// Column geometry and hydraulic state at the resolved operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGeometry {
    pub diameter: Length,
    pub area: Area,
    pub flooding_velocity: Velocity,
    pub design_velocity: Velocity,
    pub flow_parameter: f64,
    /// Irrigated pressure drop [Pa/m].
    pub dp_per_height: f64,
    /// Total pressure drop over the packed height [Pa].
    pub dp_total: f64,
    /// Liquid superficial velocity [m/s].
    pub liquid_load: f64,
    /// Minimum wetting rate [m/s].
    pub min_wetting_rate: f64,
    pub wetting_adequate: bool,
}

/// Convergence diagnostics of the bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveDiagnostics {
    pub mode: SolveMode,
    /// Resolved value of the unknown (m, fraction, or kg/s per mode).
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Per-acid-gas design detail at the resolved operating point.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesDesign {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub inlet_mole_fraction: f64,
    /// Henry's constant at operating temperature [Pa].
    pub henry_at_t: f64,
    pub enhancement_factor: f64,
    pub m_slope: f64,
    pub absorption_factor: f64,
    /// Gas-film volumetric coefficient [1/s].
    pub kg_a: f64,
    /// Reaction-enhanced liquid-film volumetric coefficient [1/s].
    pub kl_a_effective: f64,
    pub h_gas: f64,
    pub h_liquid: f64,
    pub h_og: f64,
    /// Transfer units provided by the design height.
    pub ntu: f64,
    /// Height this species alone would need for the removal target [m].
    pub required_height: f64,
    /// Removal the species was sized for, after any feasibility cap.
    pub removal_target: f64,
    pub removal_capped: bool,
    /// Removal actually achieved at the design height.
    pub removal_achieved: f64,
}

/// Exit-stream entry for every gas-phase component, carriers included.
#[derive(Debug, Clone, PartialEq)]
pub struct ExitComponent {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub inlet_mole_fraction: f64,
    /// Renormalized so the exit fractions sum to 1.
    pub outlet_mole_fraction: f64,
    pub removal_fraction: f64,
    /// Absorption rate into the solvent [mol/s].
    pub absorbed_molar_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrubberResult {
    pub solvent: String,
    pub packing: String,
    pub temperature: Temperature,
    pub pressure: Pressure,

    pub geometry: ColumnGeometry,
    pub solve: SolveDiagnostics,

    pub liquid_flow: MassRate,
    pub packed_height: Length,
    /// HETP-based height of the controlling species, for comparison [m].
    pub hetp_height: f64,

    /// Mixture molar mass [g/mol].
    pub mixture_molar_mass: f64,
    /// Gas density at operating conditions [kg/m³].
    pub gas_density: f64,
    pub gas_molar_flow: f64,
    pub liquid_molar_flow: f64,

    /// Acid gas requiring the tallest column.
    pub controlling_species: String,
    /// Removal achieved for the designated target species.
    pub target_removal_achieved: f64,

    pub species: Vec<SpeciesDesign>,
    pub exit_gas: Vec<ExitComponent>,
    /// Total molar absorption across all solutes [mol/s].
    pub total_absorbed: f64,

    /// x-y diagram data for the controlling species.
    pub lines: OperatingLines,
}
