//! Effective vapor-liquid equilibrium slope.
//!
//! Dilute absorption follows y* = m·x with
//!   m = H(T) / (E · P)
//! where H(T) is the van't Hoff-corrected Henry's constant [Pa], E the
//! chemical enhancement factor, and P the total pressure [Pa]. Reactive
//! solvents (large E) push m down and the absorption factor A = L/(m·G) up.

use sf_props::{AbsorptionKinetics, HenryConstant, PropertyStore, PropsError, SpeciesRecord, solvent_key};

use crate::error::{ColumnError, ColumnResult};

/// Equilibrium summary for one solute, as reported per species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesEquilibrium {
    /// Henry's constant at the operating temperature [Pa].
    pub henry_at_t: f64,
    pub enhancement_factor: f64,
    /// Effective slope m = H(T)/(E·P).
    pub m_slope: f64,
}

/// Effective equilibrium slope for a single solute.
pub fn effective_slope(
    henry: &HenryConstant,
    enhancement: f64,
    t_k: f64,
    p_pa: f64,
) -> ColumnResult<f64> {
    if t_k <= 0.0 || p_pa <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "temperature or pressure" });
    }
    if !enhancement.is_finite() || enhancement < 1.0 {
        return Err(ColumnError::NonPhysical { what: "enhancement factor" });
    }
    Ok(henry.at_temperature(t_k) / (enhancement * p_pa))
}

/// Resolve the equilibrium slope and kinetics for a gas in a named solvent.
///
/// Henry data prefers a solvent-specific entry and falls back to the water
/// entry; kinetics default to purely physical absorption (E = 1) when the
/// pair has no reactive entry.
pub fn species_slope(
    store: &dyn PropertyStore,
    species: &SpeciesRecord,
    solvent_name: &str,
    t_k: f64,
    p_pa: f64,
) -> ColumnResult<(SpeciesEquilibrium, AbsorptionKinetics)> {
    let key = solvent_key(solvent_name);
    let henry = store
        .henry_for(species.id, key)
        .ok_or_else(|| PropsError::MissingHenryData { species: species.id.to_string() })?;
    let kinetics = store
        .kinetics(species.id, key)
        .copied()
        .unwrap_or(AbsorptionKinetics::PHYSICAL);
    let m_slope = effective_slope(henry, kinetics.enhancement_factor, t_k, p_pa)?;
    Ok((
        SpeciesEquilibrium {
            henry_at_t: henry.at_temperature(t_k),
            enhancement_factor: kinetics.enhancement_factor,
            m_slope,
        },
        kinetics,
    ))
}
