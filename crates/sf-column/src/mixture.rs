//! Validated gas mixtures.
//!
//! A mixture is specified as mole percents against the species registry.
//! Fractions are kept exactly as given (no renormalization); validation
//! only checks that the total is close to 100%.

use sf_core::units::constants::R_GAS;
use sf_props::{PropertyStore, SpeciesCategory, SpeciesRecord};

use crate::error::{ColumnError, ColumnResult};

/// Allowed deviation of the mole-percent total from 100.
const SUM_TOLERANCE_PCT: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct MixtureComponent {
    pub species: SpeciesRecord,
    pub mole_fraction: f64,
}

/// A validated gas mixture at the column inlet.
#[derive(Debug, Clone, PartialEq)]
pub struct GasMixture {
    components: Vec<MixtureComponent>,
}

impl GasMixture {
    /// Build a mixture from `(species name, mole percent)` pairs.
    ///
    /// Rejects empty input, unknown or duplicate species, non-positive or
    /// non-finite percents, and totals outside 100 ± 0.5.
    pub fn from_mole_percents(
        store: &dyn PropertyStore,
        entries: &[(&str, f64)],
    ) -> ColumnResult<Self> {
        if entries.is_empty() {
            return Err(ColumnError::validation("gas mixture must not be empty"));
        }
        let mut components = Vec::with_capacity(entries.len());
        let mut total = 0.0;
        for (name, pct) in entries {
            if !pct.is_finite() || *pct <= 0.0 {
                return Err(ColumnError::validation(format!(
                    "mole percent for '{name}' must be a positive number, got {pct}"
                )));
            }
            let species = store
                .species(name)
                .copied()
                .ok_or_else(|| sf_props::PropsError::UnsupportedSpecies { name: name.to_string() })?;
            if components
                .iter()
                .any(|c: &MixtureComponent| c.species.id == species.id)
            {
                return Err(ColumnError::validation(format!(
                    "species '{}' listed more than once",
                    species.id
                )));
            }
            total += pct;
            components.push(MixtureComponent { species, mole_fraction: pct / 100.0 });
        }
        if (total - 100.0).abs() > SUM_TOLERANCE_PCT {
            return Err(ColumnError::validation(format!(
                "mole percents must sum to 100 ± {SUM_TOLERANCE_PCT}, got {total:.3}"
            )));
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[MixtureComponent] {
        &self.components
    }

    pub fn component(&self, name: &str) -> Option<&MixtureComponent> {
        self.components.iter().find(|c| c.species.matches(name))
    }

    /// Components that can be absorbed (acid gases).
    pub fn acid_gases(&self) -> impl Iterator<Item = &MixtureComponent> {
        self.components
            .iter()
            .filter(|c| c.species.category == SpeciesCategory::AcidGas)
    }

    /// Mole-fraction-weighted molar mass [g/mol].
    pub fn molar_mass(&self) -> f64 {
        self.components
            .iter()
            .map(|c| c.mole_fraction * c.species.molar_mass)
            .sum()
    }

    /// Molar mass [kg/mol].
    pub fn molar_mass_kg(&self) -> f64 {
        self.molar_mass() / 1000.0
    }

    /// Ideal-gas density [kg/m³] at `t_k` [K], `p_pa` [Pa].
    pub fn gas_density(&self, t_k: f64, p_pa: f64) -> ColumnResult<f64> {
        if t_k <= 0.0 || p_pa <= 0.0 {
            return Err(ColumnError::NonPhysical { what: "temperature or pressure" });
        }
        Ok(p_pa * self.molar_mass_kg() / (R_GAS * t_k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_props::BuiltinStore;

    fn flue_gas(store: &BuiltinStore) -> GasMixture {
        GasMixture::from_mole_percents(
            store,
            &[("N2", 73.0), ("CO2", 12.0), ("H2O", 12.0), ("O2", 3.0)],
        )
        .unwrap()
    }

    #[test]
    fn flue_gas_molar_mass_and_density() {
        let store = BuiltinStore::new();
        let mix = flue_gas(&store);
        let mw = mix.molar_mass();
        assert!((mw - 28.85).abs() < 0.05, "MW = {mw}");
        // 40 °C, 1.01 bar
        let rho = mix.gas_density(313.15, 1.01e5).unwrap();
        assert!((rho - 1.12).abs() < 0.01, "rho = {rho}");
    }

    #[test]
    fn sum_outside_tolerance_is_rejected() {
        let store = BuiltinStore::new();
        let err = GasMixture::from_mole_percents(&store, &[("N2", 80.0), ("CO2", 12.0)])
            .unwrap_err();
        assert!(matches!(err, ColumnError::Validation { .. }));
    }

    #[test]
    fn sum_within_half_percent_is_accepted() {
        let store = BuiltinStore::new();
        let mix =
            GasMixture::from_mole_percents(&store, &[("N2", 88.3), ("CO2", 12.0)]).unwrap();
        assert_eq!(mix.components().len(), 2);
    }

    #[test]
    fn unknown_species_is_rejected() {
        let store = BuiltinStore::new();
        let err = GasMixture::from_mole_percents(&store, &[("Xe", 100.0)]).unwrap_err();
        assert!(matches!(
            err,
            ColumnError::Props(sf_props::PropsError::UnsupportedSpecies { .. })
        ));
    }

    #[test]
    fn duplicate_species_is_rejected() {
        let store = BuiltinStore::new();
        let err = GasMixture::from_mole_percents(
            &store,
            &[("N2", 50.0), ("Nitrogen", 50.0)],
        )
        .unwrap_err();
        assert!(matches!(err, ColumnError::Validation { .. }));
    }

    #[test]
    fn acid_gases_filters_by_category() {
        let store = BuiltinStore::new();
        let mix = flue_gas(&store);
        let acid: Vec<_> = mix.acid_gases().map(|c| c.species.id).collect();
        assert_eq!(acid, vec!["CO2"]);
    }

    #[test]
    fn negative_percent_is_rejected() {
        let store = BuiltinStore::new();
        let err = GasMixture::from_mole_percents(&store, &[("N2", 110.0), ("CO2", -10.0)])
            .unwrap_err();
        assert!(matches!(err, ColumnError::Validation { .. }));
    }
}
