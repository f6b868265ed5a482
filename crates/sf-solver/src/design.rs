//! Scrubber design orchestration.
//!
//! One solve: resolve registry data, size the cross-section, evaluate every
//! acid gas through the equilibrium and transfer-unit models, bisect on the
//! unknown design variable against the controlling species, then run a
//! final pass over all gas-phase components for the exit composition.

use sf_column::hydraulics::{self, HydraulicInput, HydraulicResult};
use sf_column::mass_transfer::{self, AchievedRemoval, HtuResult, SizedHeight};
use sf_column::{equilibrium, lines};
use sf_core::units::{kgps, m, m2, mps};
use sf_props::{
    AbsorptionKinetics, Packing, PropertyStore, PropsError, SpeciesCategory, SpeciesRecord,
};
use tracing::{debug, info};

use crate::bisect::{BisectSettings, Bracket, Residual, bisect};
use crate::error::{DesignError, DesignResult};
use crate::result::{
    ColumnGeometry, ExitComponent, ScrubberResult, SolveDiagnostics, SpeciesDesign,
};
use crate::spec::{DesignObjective, DesignSpec, SolveMode};

/// Gas viscosity assumed in the gas-film correlation [Pa·s].
const MU_GAS: f64 = 1.8e-5;

/// Bisection domain for each unknown.
const HEIGHT_BRACKET: Bracket = Bracket { lo: 1e-3, hi: 100.0 };
const REMOVAL_BRACKET: Bracket = Bracket { lo: 1e-4, hi: 0.999 };
/// Liquid-flow bracket as multiples of the gas flow.
const FLOW_RATIO_LO: f64 = 1e-3;
const FLOW_RATIO_HI: f64 = 200.0;

/// Stateless design engine over a property registry.
pub struct ScrubberDesigner<'a> {
    store: &'a dyn PropertyStore,
    settings: BisectSettings,
}

impl<'a> ScrubberDesigner<'a> {
    pub fn new(store: &'a dyn PropertyStore) -> Self {
        Self { store, settings: BisectSettings::default() }
    }

    pub fn with_settings(store: &'a dyn PropertyStore, settings: BisectSettings) -> Self {
        Self { store, settings }
    }

    /// Run one full design solve.
    pub fn solve(&self, spec: &DesignSpec) -> DesignResult<ScrubberResult> {
        let ctx = Context::resolve(self.store, spec)?;
        let mode = spec.objective.mode();
        info!(
            mode = %mode,
            solvent = %spec.solvent,
            packing = %spec.packing,
            target = %spec.target_species,
            "starting scrubber solve"
        );

        let (l_final, z_final, eta_ref, outcome) = match spec.objective {
            DesignObjective::SolveForHeight { liquid_flow, removal_target } => {
                let l = positive(liquid_flow.value, "liquid flow")?;
                let eta = removal_in_range(removal_target)?;
                let hyd = ctx.hydraulics(l)?;
                let states = ctx.film_states(&hyd, l)?;
                let outcome = bisect(
                    |trial_z| {
                        let (controlling, _) = required_heights(ctx.g_mol, &states, eta)?;
                        debug!(trial_z, controlling, "height trial");
                        Ok(Residual { computed: controlling, target: trial_z })
                    },
                    HEIGHT_BRACKET,
                    &self.settings,
                )?;
                (l, outcome.value, eta, outcome)
            }
            DesignObjective::SolveForRemoval { liquid_flow, packed_height } => {
                let l = positive(liquid_flow.value, "liquid flow")?;
                let z = positive(packed_height.value, "packed height")?;
                let hyd = ctx.hydraulics(l)?;
                let states = ctx.film_states(&hyd, l)?;
                let outcome = bisect(
                    |trial_eta| {
                        let (controlling, _) = achieved_removals(ctx.g_mol, &states, z)?;
                        debug!(trial_eta, controlling, "removal trial");
                        Ok(Residual { computed: controlling, target: trial_eta })
                    },
                    REMOVAL_BRACKET,
                    &self.settings,
                )?;
                (l, z, outcome.value, outcome)
            }
            DesignObjective::SolveForFlow { removal_target, packed_height } => {
                let eta = removal_in_range(removal_target)?;
                let z = positive(packed_height.value, "packed height")?;
                let bracket = Bracket {
                    lo: FLOW_RATIO_LO * ctx.gas_flow,
                    hi: FLOW_RATIO_HI * ctx.gas_flow,
                };
                let outcome = bisect(
                    |trial_l| {
                        let hyd = ctx.hydraulics(trial_l)?;
                        let states = ctx.film_states(&hyd, trial_l)?;
                        let (controlling, _) = achieved_removals(ctx.g_mol, &states, z)?;
                        debug!(trial_l, controlling, "solvent-flow trial");
                        Ok(Residual { computed: controlling, target: eta })
                    },
                    bracket,
                    &self.settings,
                )?;
                (outcome.value, z, eta, outcome)
            }
        };

        // Final pass at the resolved operating point: per-species sizing in
        // both directions, then the exit table over every component.
        let hyd = ctx.hydraulics(l_final)?;
        let states = ctx.film_states(&hyd, l_final)?;
        let (_, fwd) = required_heights(ctx.g_mol, &states, eta_ref)?;
        let (_, inv) = achieved_removals(ctx.g_mol, &states, z_final)?;

        let ctrl_idx = fwd
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.height.total_cmp(&b.1.height))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let controlling = &states[ctrl_idx];

        let mut species_rows = Vec::with_capacity(states.len());
        for ((state, sized), achieved) in states.iter().zip(&fwd).zip(&inv) {
            species_rows.push(SpeciesDesign {
                id: state.solute.species.id.to_string(),
                name: state.solute.species.name.to_string(),
                formula: state.solute.species.formula.to_string(),
                inlet_mole_fraction: state.solute.y_in,
                henry_at_t: state.solute.eq.henry_at_t,
                enhancement_factor: state.solute.eq.enhancement_factor,
                m_slope: state.solute.eq.m_slope,
                absorption_factor: achieved.absorption_factor,
                kg_a: state.kg_a,
                kl_a_effective: state.kl_a,
                h_gas: state.htu.h_gas,
                h_liquid: state.htu.h_liquid,
                h_og: state.htu.h_og,
                ntu: achieved.ntu,
                required_height: sized.height,
                removal_target: sized.removal,
                removal_capped: sized.removal_capped,
                removal_achieved: achieved.removal,
            });
        }

        let (exit_gas, total_absorbed) = ctx.exit_composition(&states, &inv);

        let target_idx = states
            .iter()
            .position(|s| s.solute.species.matches(&spec.target_species))
            .ok_or_else(|| {
                DesignError::validation(format!(
                    "target species '{}' dropped out of the solute set",
                    spec.target_species
                ))
            })?;

        let value = match mode {
            SolveMode::PackedHeight => z_final,
            SolveMode::Removal => eta_ref,
            SolveMode::LiquidFlow => l_final,
        };
        info!(
            converged = outcome.converged,
            iterations = outcome.iterations,
            value,
            controlling = controlling.solute.species.id,
            "scrubber solve finished"
        );

        let line_data = lines::operating_equilibrium_lines(
            controlling.solute.y_in,
            fwd[ctrl_idx].y_out,
            controlling.solute.eq.m_slope,
            inv[ctrl_idx].absorption_factor,
            lines::DEFAULT_LINE_POINTS,
        );

        Ok(ScrubberResult {
            solvent: spec.solvent.clone(),
            packing: spec.packing.clone(),
            temperature: spec.conditions.temperature,
            pressure: spec.conditions.pressure,
            geometry: ColumnGeometry {
                diameter: m(hyd.diameter),
                area: m2(hyd.area),
                flooding_velocity: mps(hyd.flooding_velocity),
                design_velocity: mps(hyd.design_velocity),
                flow_parameter: hyd.flow_parameter,
                dp_per_height: hyd.dp_per_height,
                dp_total: hyd.dp_per_height * z_final,
                liquid_load: hyd.liquid_load,
                min_wetting_rate: hyd.min_wetting_rate,
                wetting_adequate: hyd.wetting_adequate,
            },
            solve: SolveDiagnostics {
                mode,
                value,
                iterations: outcome.iterations,
                converged: outcome.converged,
            },
            liquid_flow: kgps(l_final),
            packed_height: m(z_final),
            hetp_height: fwd[ctrl_idx].ntu * ctx.packing.hetp,
            mixture_molar_mass: ctx.mixture_molar_mass,
            gas_density: ctx.rho_gas,
            gas_molar_flow: ctx.g_mol,
            liquid_molar_flow: ctx.liquid_molar_flow(l_final),
            controlling_species: controlling.solute.species.id.to_string(),
            target_removal_achieved: inv[target_idx].removal,
            species: species_rows,
            exit_gas,
            total_absorbed,
            lines: line_data,
        })
    }
}

/// One absorbable component with its resolved equilibrium data.
struct Solute {
    species: SpeciesRecord,
    y_in: f64,
    eq: equilibrium::SpeciesEquilibrium,
    kinetics: AbsorptionKinetics,
}

/// Per-solute film coefficients at one hydraulic state.
struct FilmState<'a> {
    solute: &'a Solute,
    kg_a: f64,
    /// Reaction-enhanced kL·a.
    kl_a: f64,
    htu: HtuResult,
    l_mol: f64,
}

/// Registry data and derived gas properties, fixed for the whole solve.
struct Context<'s> {
    spec: &'s DesignSpec,
    packing: Packing,
    solvent: SpeciesRecord,
    p_pa: f64,
    gas_flow: f64,
    mixture_molar_mass: f64,
    rho_gas: f64,
    g_mol: f64,
    solutes: Vec<Solute>,
}

impl<'s> Context<'s> {
    fn resolve(store: &dyn PropertyStore, spec: &'s DesignSpec) -> DesignResult<Self> {
        let ff = spec.conditions.flooding_fraction;
        if !(ff > 0.0 && ff < 1.0) {
            return Err(DesignError::validation(format!(
                "flooding fraction must be in (0, 1), got {ff}"
            )));
        }
        let gas_flow = positive(spec.gas_flow.value, "gas flow")?;
        let t_k = spec.conditions.temperature.value;
        let p_pa = spec.conditions.pressure.value;

        let solvent = store
            .species(&spec.solvent)
            .copied()
            .ok_or_else(|| PropsError::UnsupportedSpecies { name: spec.solvent.clone() })?;
        if solvent.category != SpeciesCategory::Solvent {
            return Err(DesignError::validation(format!(
                "'{}' is not a solvent",
                spec.solvent
            )));
        }
        let packing = store
            .packing(&spec.packing)
            .copied()
            .ok_or_else(|| PropsError::UnsupportedPacking { name: spec.packing.clone() })?;

        let target = spec.mixture.component(&spec.target_species).ok_or_else(|| {
            DesignError::validation(format!(
                "target species '{}' is not part of the gas mixture",
                spec.target_species
            ))
        })?;
        if target.species.category != SpeciesCategory::AcidGas {
            return Err(DesignError::validation(format!(
                "target species '{}' is not an acid gas",
                spec.target_species
            )));
        }

        let mixture_molar_mass = spec.mixture.molar_mass();
        let rho_gas = spec.mixture.gas_density(t_k, p_pa)?;
        let g_mol = gas_flow / spec.mixture.molar_mass_kg();

        let mut solutes = Vec::new();
        for comp in spec.mixture.acid_gases() {
            let (eq, kinetics) =
                equilibrium::species_slope(store, &comp.species, &spec.solvent, t_k, p_pa)?;
            solutes.push(Solute {
                species: comp.species,
                y_in: comp.mole_fraction,
                eq,
                kinetics,
            });
        }

        Ok(Self {
            spec,
            packing,
            solvent,
            p_pa,
            gas_flow,
            mixture_molar_mass,
            rho_gas,
            g_mol,
            solutes,
        })
    }

    fn hydraulics(&self, l_mass: f64) -> DesignResult<HydraulicResult> {
        let input = HydraulicInput {
            gas_flow: self.gas_flow,
            liquid_flow: l_mass,
            rho_gas: self.rho_gas,
            rho_liquid: self.spec.liquid.density.value,
            mu_liquid: self.spec.liquid.viscosity.value,
            surface_tension: self.spec.liquid.surface_tension,
            flooding_fraction: self.spec.conditions.flooding_fraction,
        };
        Ok(hydraulics::size(&input, &self.packing)?)
    }

    fn liquid_molar_flow(&self, l_mass: f64) -> f64 {
        l_mass / self.solvent.molar_mass_kg()
    }

    fn film_states(&self, hyd: &HydraulicResult, l_mass: f64) -> DesignResult<Vec<FilmState<'_>>> {
        let l_mol = self.liquid_molar_flow(l_mass);
        let gas_flux = self.gas_flow / hyd.area;
        let liquid_flux = l_mass / hyd.area;
        let g_mol_flux = self.g_mol / hyd.area;
        let l_mol_flux = l_mol / hyd.area;
        let d_nom = self.packing.nominal_diameter();
        let a_p = self.packing.specific_area;
        let mu_l = self.spec.liquid.viscosity.value;
        let rho_l = self.spec.liquid.density.value;

        let mut states = Vec::with_capacity(self.solutes.len());
        for solute in &self.solutes {
            let kg_a = mass_transfer::onda_kg_a(
                gas_flux,
                a_p,
                solute.kinetics.diff_gas,
                MU_GAS,
                self.rho_gas,
                d_nom,
            )?;
            let kl_a = mass_transfer::onda_kl_a(
                liquid_flux,
                a_p,
                solute.kinetics.diff_liquid,
                mu_l,
                rho_l,
                d_nom,
            )? * solute.kinetics.enhancement_factor;
            let htu = mass_transfer::overall_htu(
                g_mol_flux,
                l_mol_flux,
                solute.eq.m_slope,
                kg_a,
                kl_a,
                self.p_pa,
            )?;
            states.push(FilmState { solute, kg_a, kl_a, htu, l_mol });
        }
        Ok(states)
    }

    /// Exit composition over every component, renormalized to sum to 1.
    fn exit_composition(
        &self,
        states: &[FilmState<'_>],
        inv: &[AchievedRemoval],
    ) -> (Vec<ExitComponent>, f64) {
        let mut exit = Vec::with_capacity(self.spec.mixture.components().len());
        let mut total_absorbed = 0.0;
        let mut outlet_sum = 0.0;
        for comp in self.spec.mixture.components() {
            let absorbed = states
                .iter()
                .position(|s| s.solute.species.id == comp.species.id)
                .map(|i| &inv[i]);
            let (y_out, removal, rate) = match absorbed {
                Some(a) => {
                    let rate = (comp.mole_fraction - a.y_out) * self.g_mol;
                    total_absorbed += rate;
                    (a.y_out, a.removal, rate)
                }
                // carriers and solvent vapor pass through
                None => (comp.mole_fraction, 0.0, 0.0),
            };
            outlet_sum += y_out;
            exit.push(ExitComponent {
                id: comp.species.id.to_string(),
                name: comp.species.name.to_string(),
                formula: comp.species.formula.to_string(),
                inlet_mole_fraction: comp.mole_fraction,
                outlet_mole_fraction: y_out,
                removal_fraction: removal,
                absorbed_molar_rate: rate,
            });
        }
        if outlet_sum > 0.0 {
            for e in &mut exit {
                e.outlet_mole_fraction /= outlet_sum;
            }
        }
        (exit, total_absorbed)
    }
}

/// Forward sizing of every solute; returns the controlling (max) height.
fn required_heights(
    g_mol: f64,
    states: &[FilmState<'_>],
    removal: f64,
) -> DesignResult<(f64, Vec<SizedHeight>)> {
    let mut rows = Vec::with_capacity(states.len());
    let mut max = f64::NEG_INFINITY;
    for state in states {
        let sized = mass_transfer::required_height(
            state.solute.eq.m_slope,
            g_mol,
            state.l_mol,
            state.solute.y_in,
            removal,
            state.htu.h_og,
        )?;
        max = max.max(sized.height);
        rows.push(sized);
    }
    Ok((max, rows))
}

/// Inverse evaluation of every solute; returns the controlling (min) removal.
fn achieved_removals(
    g_mol: f64,
    states: &[FilmState<'_>],
    height: f64,
) -> DesignResult<(f64, Vec<AchievedRemoval>)> {
    let mut rows = Vec::with_capacity(states.len());
    let mut min = f64::INFINITY;
    for state in states {
        let achieved = mass_transfer::achieved_removal(
            state.solute.eq.m_slope,
            g_mol,
            state.l_mol,
            state.solute.y_in,
            height,
            state.htu.h_og,
        )?;
        min = min.min(achieved.removal);
        rows.push(achieved);
    }
    Ok((min, rows))
}

fn positive(value: f64, what: &str) -> DesignResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DesignError::validation(format!("{what} must be positive, got {value}")));
    }
    Ok(value)
}

fn removal_in_range(value: f64) -> DesignResult<f64> {
    if !value.is_finite() || !(value > 0.0 && value < 1.0) {
        return Err(DesignError::validation(format!(
            "removal target must be in (0, 1), got {value}"
        )));
    }
    Ok(value)
}
