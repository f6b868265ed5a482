//! sf-solver: multi-component scrubber design.
//!
//! Couples the sf-column physics into a design solve: two of
//! {solvent flow L, removal η, packed height Z} are fixed, the third is
//! found by bounded bisection on the controlling acid-gas species.

pub mod bisect;
pub mod design;
pub mod error;
pub mod result;
pub mod spec;

pub use bisect::{BisectOutcome, BisectSettings, Bracket, Residual};
pub use design::ScrubberDesigner;
pub use error::{DesignError, DesignResult};
pub use result::{
    ColumnGeometry, ExitComponent, ScrubberResult, SolveDiagnostics, SpeciesDesign,
};
pub use spec::{DesignObjective, DesignSpec, LiquidProperties, OperatingConditions, SolveMode};
