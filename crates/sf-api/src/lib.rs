//! sf-api: serde boundary for scrubber design requests and responses.
//!
//! Requests arrive as JSON with the "two of three" design inputs; the
//! solve_for tag decides which pairing is legal, checked once at
//! request-to-spec conversion. Responses flatten the solver result into
//! plain serializable sections.

pub mod error;
pub mod request;
pub mod response;

pub use error::{ApiError, ApiResult};
pub use request::{DesignRequest, GasComponent, LiquidSpec, SolveFor};
pub use response::DesignResponse;

use sf_props::PropertyStore;

/// Convert, solve, and flatten in one call.
pub fn run_design(store: &dyn PropertyStore, request: &DesignRequest) -> ApiResult<DesignResponse> {
    let spec = request.to_spec(store)?;
    let result = sf_solver::ScrubberDesigner::new(store).solve(&spec)?;
    Ok(DesignResponse::new(request, &result))
}
