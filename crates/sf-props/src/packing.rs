//! Column packing records.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackingKind {
    Random,
    Structured,
}

/// Immutable packing record.
///
/// Units: specific_area [m²/m³], packing_factor [1/m], hetp [m].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Packing {
    pub name: &'static str,
    pub kind: PackingKind,
    /// Nominal element size [mm]; absent for structured packings.
    pub nominal_size_mm: Option<f64>,
    pub specific_area: f64,
    pub void_fraction: f64,
    pub packing_factor: f64,
    pub hetp: f64,
}

impl Packing {
    /// Nominal packing diameter [m] for the Onda correlation.
    ///
    /// Structured packings have no nominal size; estimate d_p ≈ 4ε/a_p.
    pub fn nominal_diameter(&self) -> f64 {
        match self.nominal_size_mm {
            Some(mm) if mm > 0.0 => mm / 1000.0,
            _ => 4.0 * self.void_fraction / self.specific_area,
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query.trim())
    }
}
