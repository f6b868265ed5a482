//! sf-column: packed-column physics for gas absorption.
//!
//! Contains:
//! - mixture (validated gas mixtures + ideal-gas density)
//! - equilibrium (Henry-based effective equilibrium slope)
//! - hydraulics (GPDC flooding, column diameter, irrigated pressure drop)
//! - mass_transfer (Kremser NTU both directions, Onda coefficients, HTU)
//! - lines (operating/equilibrium line data for x-y diagrams)

pub mod equilibrium;
pub mod error;
pub mod hydraulics;
pub mod lines;
pub mod mass_transfer;
pub mod mixture;

pub use equilibrium::{SpeciesEquilibrium, effective_slope, species_slope};
pub use error::{ColumnError, ColumnResult};
pub use hydraulics::{HydraulicInput, HydraulicResult};
pub use lines::OperatingLines;
pub use mass_transfer::{AchievedRemoval, HtuResult, SizedHeight};
pub use mixture::{GasMixture, MixtureComponent};
