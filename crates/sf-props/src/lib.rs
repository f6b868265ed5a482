//! sf-props: compound and packing property registry.
//!
//! Read-only lookups for species records, Henry's-law constants,
//! absorption kinetics (enhancement factors), and packing characteristics.
//! The [`PropertyStore`] trait is the seam the design solver consumes;
//! [`BuiltinStore`] carries the reference data tables.

pub mod error;
pub mod henry;
pub mod kinetics;
pub mod packing;
pub mod species;
pub mod store;

pub use error::{PropsError, PropsResult};
pub use henry::HenryConstant;
pub use kinetics::AbsorptionKinetics;
pub use packing::{Packing, PackingKind};
pub use species::{SpeciesCategory, SpeciesRecord};
pub use store::{BuiltinStore, PropertyStore, WATER_KEY, solvent_key};
