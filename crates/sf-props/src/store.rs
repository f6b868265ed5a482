//! Property store trait and the built-in reference data.
//!
//! The solver receives a `&dyn PropertyStore` at construction; tests can
//! substitute synthetic stores with made-up species.

use crate::henry::HenryConstant;
use crate::kinetics::AbsorptionKinetics;
use crate::packing::{Packing, PackingKind};
use crate::species::{SpeciesCategory, SpeciesRecord};

/// Kinetics/Henry key for physical aqueous absorption.
pub const WATER_KEY: &str = "water";

/// Map a solvent name to its kinetics table key.
///
/// Amines get their own keys; everything else is treated as a physical
/// aqueous solvent.
pub fn solvent_key(solvent_name: &str) -> &'static str {
    let name = solvent_name.trim().to_ascii_lowercase();
    if name == "mea" || name.contains("monoethanolamine") {
        "MEA"
    } else if name == "mdea" || name.contains("methyldiethanolamine") {
        "MDEA"
    } else {
        WATER_KEY
    }
}

/// Read-only, synchronous property lookups.
pub trait PropertyStore {
    /// Exact (case-insensitive) species lookup by id, name, or formula.
    fn species(&self, name: &str) -> Option<&SpeciesRecord>;

    /// Exact (case-insensitive) packing lookup by name.
    fn packing(&self, name: &str) -> Option<&Packing>;

    /// Henry's constant for a gas-solvent pair.
    fn henry(&self, gas_id: &str, solvent: &str) -> Option<&HenryConstant>;

    /// Absorption kinetics for a gas-solvent pair.
    fn kinetics(&self, gas_id: &str, solvent: &str) -> Option<&AbsorptionKinetics>;

    fn list_species(&self, category: Option<SpeciesCategory>) -> Vec<&SpeciesRecord>;

    fn search_species(&self, query: &str) -> Vec<&SpeciesRecord>;

    fn list_packings(&self, kind: Option<PackingKind>) -> Vec<&Packing>;

    /// Henry's constant preferring a solvent-specific entry, falling back
    /// to the water entry (the usual case for dilute aqueous solvents).
    fn henry_for(&self, gas_id: &str, solvent: &str) -> Option<&HenryConstant> {
        self.henry(gas_id, solvent)
            .or_else(|| self.henry(gas_id, WATER_KEY))
    }
}

// ── Built-in reference data ────────────────────────────────────────────

use SpeciesCategory::{AcidGas, CarrierGas, Solvent};

const SPECIES: &[SpeciesRecord] = &[
    SpeciesRecord { id: "H2O", name: "Water", formula: "H2O", molar_mass: 18.015, category: Solvent },
    SpeciesRecord { id: "MeOH", name: "Methanol", formula: "CH3OH", molar_mass: 32.042, category: Solvent },
    SpeciesRecord { id: "MEA", name: "Monoethanolamine", formula: "C2H7NO", molar_mass: 61.083, category: Solvent },
    SpeciesRecord { id: "DEA", name: "Diethanolamine", formula: "C4H11NO2", molar_mass: 105.14, category: Solvent },
    SpeciesRecord { id: "MDEA", name: "Methyldiethanolamine", formula: "C5H13NO2", molar_mass: 119.16, category: Solvent },
    SpeciesRecord { id: "CO2", name: "Carbon dioxide", formula: "CO2", molar_mass: 44.01, category: AcidGas },
    SpeciesRecord { id: "H2S", name: "Hydrogen sulfide", formula: "H2S", molar_mass: 34.08, category: AcidGas },
    SpeciesRecord { id: "SO2", name: "Sulfur dioxide", formula: "SO2", molar_mass: 64.066, category: AcidGas },
    SpeciesRecord { id: "NH3", name: "Ammonia", formula: "NH3", molar_mass: 17.031, category: AcidGas },
    SpeciesRecord { id: "Cl2", name: "Chlorine", formula: "Cl2", molar_mass: 70.906, category: AcidGas },
    SpeciesRecord { id: "N2", name: "Nitrogen", formula: "N2", molar_mass: 28.014, category: CarrierGas },
    SpeciesRecord { id: "O2", name: "Oxygen", formula: "O2", molar_mass: 31.999, category: CarrierGas },
    SpeciesRecord { id: "CH4", name: "Methane", formula: "CH4", molar_mass: 16.043, category: CarrierGas },
    SpeciesRecord { id: "CO", name: "Carbon monoxide", formula: "CO", molar_mass: 28.010, category: CarrierGas },
];

struct HenryEntry {
    gas: &'static str,
    solvent: &'static str,
    constant: HenryConstant,
}

// Sander (2015) for water; Austgen (1989) for CO2 in 30 wt% MEA.
const HENRY: &[HenryEntry] = &[
    HenryEntry { gas: "CO2", solvent: "water", constant: HenryConstant::new(1.61e8, -19_400.0) },
    HenryEntry { gas: "O2", solvent: "water", constant: HenryConstant::new(4.26e9, -14_200.0) },
    HenryEntry { gas: "N2", solvent: "water", constant: HenryConstant::new(8.65e9, -10_400.0) },
    HenryEntry { gas: "H2S", solvent: "water", constant: HenryConstant::new(5.53e7, -18_000.0) },
    HenryEntry { gas: "SO2", solvent: "water", constant: HenryConstant::new(7.88e5, -24_800.0) },
    HenryEntry { gas: "NH3", solvent: "water", constant: HenryConstant::new(5.69e4, -34_200.0) },
    HenryEntry { gas: "Cl2", solvent: "water", constant: HenryConstant::new(6.25e6, -18_900.0) },
    HenryEntry { gas: "CH4", solvent: "water", constant: HenryConstant::new(4.13e9, -14_500.0) },
    HenryEntry { gas: "CO", solvent: "water", constant: HenryConstant::new(5.80e9, -11_000.0) },
    HenryEntry { gas: "CO2", solvent: "MEA", constant: HenryConstant::new(2.41e6, -84_000.0) },
];

struct KineticsEntry {
    gas: &'static str,
    solvent: &'static str,
    kinetics: AbsorptionKinetics,
}

// Order-of-magnitude enhancement factors for fast amine reactions.
const KINETICS: &[KineticsEntry] = &[
    KineticsEntry {
        gas: "CO2",
        solvent: "MEA",
        kinetics: AbsorptionKinetics { enhancement_factor: 150.0, diff_gas: 1.6e-5, diff_liquid: 1.9e-9 },
    },
    KineticsEntry {
        gas: "H2S",
        solvent: "MEA",
        kinetics: AbsorptionKinetics { enhancement_factor: 300.0, diff_gas: 1.7e-5, diff_liquid: 1.6e-9 },
    },
    KineticsEntry {
        gas: "CO2",
        solvent: "MDEA",
        kinetics: AbsorptionKinetics { enhancement_factor: 12.0, diff_gas: 1.6e-5, diff_liquid: 1.8e-9 },
    },
    KineticsEntry {
        gas: "H2S",
        solvent: "MDEA",
        kinetics: AbsorptionKinetics { enhancement_factor: 180.0, diff_gas: 1.7e-5, diff_liquid: 1.6e-9 },
    },
];

use PackingKind::{Random, Structured};

const PACKINGS: &[Packing] = &[
    Packing { name: "Raschig Ring 25mm", kind: Random, nominal_size_mm: Some(25.0), specific_area: 190.0, void_fraction: 0.68, packing_factor: 580.0, hetp: 0.60 },
    Packing { name: "Raschig Ring 50mm", kind: Random, nominal_size_mm: Some(50.0), specific_area: 95.0, void_fraction: 0.74, packing_factor: 155.0, hetp: 0.90 },
    Packing { name: "Pall Ring 25mm", kind: Random, nominal_size_mm: Some(25.0), specific_area: 205.0, void_fraction: 0.94, packing_factor: 157.0, hetp: 0.45 },
    Packing { name: "Pall Ring 50mm", kind: Random, nominal_size_mm: Some(50.0), specific_area: 105.0, void_fraction: 0.96, packing_factor: 66.0, hetp: 0.65 },
    Packing { name: "IMTP 25", kind: Random, nominal_size_mm: Some(25.0), specific_area: 230.0, void_fraction: 0.97, packing_factor: 135.0, hetp: 0.40 },
    Packing { name: "IMTP 50", kind: Random, nominal_size_mm: Some(50.0), specific_area: 108.0, void_fraction: 0.98, packing_factor: 57.0, hetp: 0.60 },
    Packing { name: "Mellapak 250Y", kind: Structured, nominal_size_mm: None, specific_area: 250.0, void_fraction: 0.98, packing_factor: 66.0, hetp: 0.35 },
    Packing { name: "Mellapak 500Y", kind: Structured, nominal_size_mm: None, specific_area: 500.0, void_fraction: 0.98, packing_factor: 112.0, hetp: 0.20 },
    Packing { name: "Flexipac 1Y", kind: Structured, nominal_size_mm: None, specific_area: 410.0, void_fraction: 0.97, packing_factor: 98.0, hetp: 0.25 },
    Packing { name: "Flexipac 2Y", kind: Structured, nominal_size_mm: None, specific_area: 225.0, void_fraction: 0.98, packing_factor: 59.0, hetp: 0.40 },
    Packing { name: "Berl Saddle 25mm", kind: Random, nominal_size_mm: Some(25.0), specific_area: 250.0, void_fraction: 0.68, packing_factor: 360.0, hetp: 0.55 },
    Packing { name: "Intalox Saddle 25mm", kind: Random, nominal_size_mm: Some(25.0), specific_area: 256.0, void_fraction: 0.73, packing_factor: 302.0, hetp: 0.50 },
];

/// Registry backed by the built-in reference tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinStore;

impl BuiltinStore {
    pub fn new() -> Self {
        Self
    }
}

impl PropertyStore for BuiltinStore {
    fn species(&self, name: &str) -> Option<&SpeciesRecord> {
        SPECIES.iter().find(|s| s.matches(name))
    }

    fn packing(&self, name: &str) -> Option<&Packing> {
        PACKINGS.iter().find(|p| p.matches(name))
    }

    fn henry(&self, gas_id: &str, solvent: &str) -> Option<&HenryConstant> {
        HENRY
            .iter()
            .find(|e| e.gas.eq_ignore_ascii_case(gas_id) && e.solvent.eq_ignore_ascii_case(solvent))
            .map(|e| &e.constant)
    }

    fn kinetics(&self, gas_id: &str, solvent: &str) -> Option<&AbsorptionKinetics> {
        KINETICS
            .iter()
            .find(|e| e.gas.eq_ignore_ascii_case(gas_id) && e.solvent.eq_ignore_ascii_case(solvent))
            .map(|e| &e.kinetics)
    }

    fn list_species(&self, category: Option<SpeciesCategory>) -> Vec<&SpeciesRecord> {
        SPECIES
            .iter()
            .filter(|s| category.is_none_or(|c| s.category == c))
            .collect()
    }

    fn search_species(&self, query: &str) -> Vec<&SpeciesRecord> {
        SPECIES.iter().filter(|s| s.matches_query(query)).collect()
    }

    fn list_packings(&self, kind: Option<PackingKind>) -> Vec<&Packing> {
        PACKINGS
            .iter()
            .filter(|p| kind.is_none_or(|k| p.kind == k))
            .collect()
    }
}
