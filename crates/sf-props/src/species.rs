//! Chemical species records.

/// Role a species plays in a scrubbing problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeciesCategory {
    /// Absorbable solute (CO₂, H₂S, SO₂, ...).
    AcidGas,
    /// Inert passenger in the gas phase (N₂, O₂, ...).
    CarrierGas,
    /// Liquid-phase solvent (water, amines, ...).
    Solvent,
}

/// Immutable species record as stored in the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesRecord {
    /// Canonical short id, e.g. "CO2".
    pub id: &'static str,
    /// Human-readable name, e.g. "Carbon dioxide".
    pub name: &'static str,
    pub formula: &'static str,
    /// Molar mass [g/mol].
    pub molar_mass: f64,
    pub category: SpeciesCategory,
}

impl SpeciesRecord {
    /// Case-insensitive match against id, name, or formula.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.id.eq_ignore_ascii_case(query)
            || self.name.eq_ignore_ascii_case(query)
            || self.formula.eq_ignore_ascii_case(query)
    }

    /// Substring match for registry search.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }
        self.id.to_ascii_lowercase().contains(&query)
            || self.name.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
    }

    /// Molar mass in [kg/mol].
    pub fn molar_mass_kg(&self) -> f64 {
        self.molar_mass / 1000.0
    }
}
