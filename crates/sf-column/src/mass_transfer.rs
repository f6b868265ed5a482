//! Transfer-unit sizing: Kremser equation, Onda coefficients, HTU.
//!
//! Dilute absorption with straight operating and equilibrium lines.
//! Heights follow the HTU/NTU method, Z = H_OG · N_OG, with the Onda (1968)
//! correlation supplying the film coefficients.

use sf_core::units::constants::{C_LIQUID_WATER, G0_MPS2, R_GAS};

use crate::error::{ColumnError, ColumnResult};

/// |A − 1| below this switches to the L'Hôpital limit of the Kremser form.
const A_UNITY_TOL: f64 = 1e-6;

/// Requested removal is capped below this, regardless of feasibility.
const REMOVAL_MAX: f64 = 0.999;

/// Fraction of specific area assumed wetted and active.
const WETTED_AREA_FRACTION: f64 = 0.80;

/// Reference temperature [K] for the gas-phase molar concentration in HTU.
const T_REF_GAS: f64 = 298.15;

/// Absorption factor A = L/(m·G).
pub fn absorption_factor(l_mol: f64, g_mol: f64, m: f64) -> ColumnResult<f64> {
    if m <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "equilibrium slope" });
    }
    if g_mol <= 0.0 || l_mol <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "molar flow" });
    }
    Ok(l_mol / (m * g_mol))
}

/// Kremser-Souders-Brown transfer-unit count.
///
/// N_OG = ln[(y_in/y_out)(1 − 1/A) + 1/A] / ln A, with the A → 1 limit
/// N_OG = y_in/y_out − 1.
pub fn kremser_ntu(y_in: f64, y_out: f64, a: f64) -> ColumnResult<f64> {
    if y_in <= 0.0 || y_out <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "gas mole fraction" });
    }
    if y_out >= y_in {
        return Err(ColumnError::validation(format!(
            "outlet fraction {y_out} must be below inlet fraction {y_in}"
        )));
    }
    if a <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "absorption factor" });
    }
    let ratio = y_in / y_out;
    if (a - 1.0).abs() < A_UNITY_TOL {
        return Ok(ratio - 1.0);
    }
    let arg = ratio * (1.0 - 1.0 / a) + 1.0 / a;
    if arg <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "Kremser argument" });
    }
    Ok(arg.ln() / a.ln())
}

/// Exact inverse of [`kremser_ntu`]: outlet fraction for a given NTU.
///
/// y_out = y_in (A − 1)/(A^{N+1} − 1), with the A → 1 limit y_in/(1 + N).
pub fn kremser_y_out(y_in: f64, a: f64, ntu: f64) -> ColumnResult<f64> {
    if y_in <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "gas mole fraction" });
    }
    if a <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "absorption factor" });
    }
    if ntu < 0.0 {
        return Err(ColumnError::NonPhysical { what: "transfer units" });
    }
    if (a - 1.0).abs() < A_UNITY_TOL {
        return Ok(y_in / (1.0 + ntu));
    }
    // A > 1 and large NTU overflows A^{N+1} to +inf; the quotient then
    // collapses to 0, which is the correct limit.
    Ok(y_in * (a - 1.0) / (a.powf(ntu + 1.0) - 1.0))
}

/// Gas-film volumetric coefficient kG·a [1/s], Onda (1968).
///
/// kG/(a_p·D_G) = 5.23 · Re_G^0.7 · Sc_G^{1/3} · (a_p·d_p)^{−2}, applied
/// over the wetted fraction of the specific area.
pub fn onda_kg_a(
    gas_mass_flux: f64,
    a_p: f64,
    d_g: f64,
    mu_g: f64,
    rho_g: f64,
    d_nom: f64,
) -> ColumnResult<f64> {
    if gas_mass_flux <= 0.0 || a_p <= 0.0 || d_g <= 0.0 || mu_g <= 0.0 || rho_g <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "Onda gas-film inputs" });
    }
    let re = gas_mass_flux / (a_p * mu_g);
    let sc = mu_g / (rho_g * d_g);
    let ad = a_p * d_nom;
    let kg = 5.23 * a_p * d_g * re.powf(0.7) * sc.powf(1.0 / 3.0) * ad.powi(-2);
    Ok(kg * WETTED_AREA_FRACTION * a_p)
}

/// Liquid-film volumetric coefficient kL·a [1/s], Onda (1968).
///
/// kL·(ρ_L/(μ_L·g))^{1/3} = 0.0051 · Re_L^{2/3} · Sc_L^{−1/2} · (a_p·d_p)^{0.4}.
pub fn onda_kl_a(
    liquid_mass_flux: f64,
    a_p: f64,
    d_l: f64,
    mu_l: f64,
    rho_l: f64,
    d_nom: f64,
) -> ColumnResult<f64> {
    if liquid_mass_flux <= 0.0 || a_p <= 0.0 || d_l <= 0.0 || mu_l <= 0.0 || rho_l <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "Onda liquid-film inputs" });
    }
    let re = liquid_mass_flux / (a_p * mu_l);
    let sc = mu_l / (rho_l * d_l);
    let ad = a_p * d_nom;
    let grav = (rho_l / (mu_l * G0_MPS2)).powf(1.0 / 3.0);
    let kl = 0.0051 / grav * re.powf(2.0 / 3.0) * sc.powf(-0.5) * ad.powf(0.4);
    Ok(kl * WETTED_AREA_FRACTION * a_p)
}

/// Individual and overall transfer-unit heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HtuResult {
    pub h_gas: f64,
    pub h_liquid: f64,
    pub h_og: f64,
    /// Stripping factor λ = m·G/L.
    pub stripping_factor: f64,
}

/// Overall gas-phase HTU: H_OG = H_G + λ·H_L.
///
/// Fluxes in mol/(m²·s); the gas molar concentration uses the reference
/// temperature, the liquid one is that of water.
pub fn overall_htu(
    g_mol_flux: f64,
    l_mol_flux: f64,
    m: f64,
    kg_a: f64,
    kl_a: f64,
    p_total: f64,
) -> ColumnResult<HtuResult> {
    if g_mol_flux <= 0.0 || l_mol_flux <= 0.0 || p_total <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "HTU fluxes or pressure" });
    }
    if kg_a <= 0.0 || kl_a <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "mass transfer coefficients" });
    }
    let c_gas = p_total / (R_GAS * T_REF_GAS);
    let h_gas = g_mol_flux / (kg_a * c_gas);
    let h_liquid = l_mol_flux / (kl_a * C_LIQUID_WATER);
    let stripping_factor = m * g_mol_flux / l_mol_flux;
    Ok(HtuResult {
        h_gas,
        h_liquid,
        h_og: h_gas + stripping_factor * h_liquid,
        stripping_factor,
    })
}

/// Height sizing outcome for one solute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizedHeight {
    pub absorption_factor: f64,
    pub ntu: f64,
    pub height: f64,
    /// Outlet fraction at the (possibly capped) target.
    pub y_out: f64,
    /// Removal actually sized for, after capping.
    pub removal: f64,
    pub removal_capped: bool,
}

/// Packed height needed to hit a removal target.
///
/// When A < 1 the Kremser form saturates at a removal of A; targets beyond
/// 95% of that ceiling are pulled back to 90% of it and flagged, so the
/// sizing stays finite while the caller sees the infeasibility.
pub fn required_height(
    m: f64,
    g_mol: f64,
    l_mol: f64,
    y_in: f64,
    removal_target: f64,
    h_og: f64,
) -> ColumnResult<SizedHeight> {
    if !(removal_target > 0.0 && removal_target < 1.0) {
        return Err(ColumnError::validation(format!(
            "removal target must be in (0, 1), got {removal_target}"
        )));
    }
    if h_og <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "transfer-unit height" });
    }
    let a = absorption_factor(l_mol, g_mol, m)?;
    let mut removal = removal_target.min(REMOVAL_MAX);
    let mut removal_capped = false;
    if a < 1.0 && removal > 0.95 * a {
        removal = 0.90 * a;
        removal_capped = true;
    }
    let y_out = y_in * (1.0 - removal);
    let ntu = kremser_ntu(y_in, y_out, a)?;
    Ok(SizedHeight {
        absorption_factor: a,
        ntu,
        height: ntu * h_og,
        y_out,
        removal,
        removal_capped,
    })
}

/// Removal actually achieved by a given packed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AchievedRemoval {
    pub absorption_factor: f64,
    pub ntu: f64,
    pub y_out: f64,
    pub removal: f64,
}

/// Forward Kremser pass: outlet fraction for an existing packed height.
pub fn achieved_removal(
    m: f64,
    g_mol: f64,
    l_mol: f64,
    y_in: f64,
    height: f64,
    h_og: f64,
) -> ColumnResult<AchievedRemoval> {
    if height <= 0.0 || h_og <= 0.0 {
        return Err(ColumnError::NonPhysical { what: "packed height or HTU" });
    }
    let a = absorption_factor(l_mol, g_mol, m)?;
    let ntu = height / h_og;
    let y_out = kremser_y_out(y_in, a, ntu)?;
    Ok(AchievedRemoval { absorption_factor: a, ntu, y_out, removal: 1.0 - y_out / y_in })
}
