//! Bounded bisection on a monotone residual.
//!
//! The design unknowns (packed height, removal, solvent flow) all sit on
//! monotone physical relationships, so a plain bracketing bisection is
//! robust and needs no derivatives. A sign check on the bracket endpoints
//! guards against infeasible targets; in that case the better endpoint is
//! returned unconverged rather than failing.

use sf_core::numeric::relative_gap;
use tracing::{debug, warn};

use crate::error::{DesignError, DesignResult};

/// Closed search interval for the unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lo: f64,
    pub hi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectSettings {
    pub max_iterations: usize,
    /// Relative gap between computed and target quantity at convergence.
    pub rel_tol: f64,
}

impl Default for BisectSettings {
    fn default() -> Self {
        Self { max_iterations: 60, rel_tol: 1e-4 }
    }
}

/// One evaluation of the physics at a trial value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    /// Quantity the physics produced (controlling height or removal).
    pub computed: f64,
    /// Quantity it is being driven towards.
    pub target: f64,
}

impl Residual {
    pub fn signed(&self) -> f64 {
        self.computed - self.target
    }

    fn gap(&self) -> f64 {
        relative_gap(self.computed, self.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectOutcome {
    /// Resolved value of the unknown (best estimate when unconverged).
    pub value: f64,
    /// Physics output at `value`.
    pub computed: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Bisect `f` over `bracket` until the residual's relative gap closes.
///
/// `f` is evaluated at both endpoints first; if the residual does not
/// change sign the target is unreachable inside the bracket and the
/// endpoint with the smaller residual is returned with `converged = false`.
pub fn bisect<F>(
    mut f: F,
    bracket: Bracket,
    settings: &BisectSettings,
) -> DesignResult<BisectOutcome>
where
    F: FnMut(f64) -> DesignResult<Residual>,
{
    let Bracket { mut lo, mut hi } = bracket;
    if !(lo.is_finite() && hi.is_finite() && lo < hi) {
        return Err(DesignError::validation(format!("invalid bracket [{lo}, {hi}]")));
    }

    let r_lo = f(lo)?;
    let r_hi = f(hi)?;
    for (value, r) in [(lo, r_lo), (hi, r_hi)] {
        if r.gap() <= settings.rel_tol {
            return Ok(BisectOutcome { value, computed: r.computed, iterations: 0, converged: true });
        }
    }
    if r_lo.signed() * r_hi.signed() > 0.0 {
        let (value, r) = if r_lo.signed().abs() <= r_hi.signed().abs() {
            (lo, r_lo)
        } else {
            (hi, r_hi)
        };
        warn!(lo, hi, residual_lo = r_lo.signed(), residual_hi = r_hi.signed(),
            "residual does not change sign over the bracket; target unreachable");
        return Ok(BisectOutcome { value, computed: r.computed, iterations: 0, converged: false });
    }

    let sign_lo = r_lo.signed().signum();
    let mut last = (0.5 * (lo + hi), r_lo);
    for iteration in 1..=settings.max_iterations {
        let mid = 0.5 * (lo + hi);
        let r = f(mid)?;
        debug!(iteration, trial = mid, computed = r.computed, residual = r.signed(),
            "bisection step");
        if r.gap() <= settings.rel_tol {
            return Ok(BisectOutcome {
                value: mid,
                computed: r.computed,
                iterations: iteration,
                converged: true,
            });
        }
        if r.signed().signum() == sign_lo {
            lo = mid;
        } else {
            hi = mid;
        }
        last = (mid, r);
    }

    let (value, r) = last;
    warn!(value, iterations = settings.max_iterations, "bisection exhausted iterations");
    Ok(BisectOutcome {
        value,
        computed: r.computed,
        iterations: settings.max_iterations,
        converged: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> BisectSettings {
        BisectSettings::default()
    }

    #[test]
    fn finds_fixed_point_of_constant_function() {
        // computed is constant: the solve reduces to finding trial == constant
        let out = bisect(
            |trial| Ok(Residual { computed: 3.7, target: trial }),
            Bracket { lo: 1e-3, hi: 100.0 },
            &settings(),
        )
        .unwrap();
        assert!(out.converged);
        assert!((out.value - 3.7).abs() / 3.7 < 1e-3, "value = {}", out.value);
    }

    #[test]
    fn finds_root_of_monotone_function() {
        // computed(l) = sqrt(l), target 2.0 → root at 4.0
        let out = bisect(
            |l| Ok(Residual { computed: l.sqrt(), target: 2.0 }),
            Bracket { lo: 0.01, hi: 200.0 },
            &settings(),
        )
        .unwrap();
        assert!(out.converged);
        assert!((out.value - 4.0).abs() < 0.01);
        assert!(out.iterations <= 60);
    }

    #[test]
    fn one_sided_residual_reports_unconverged_endpoint() {
        // target 150 is unreachable: computed < 100 over the whole bracket
        let out = bisect(
            |l| Ok(Residual { computed: l.min(100.0), target: 150.0 }),
            Bracket { lo: 1.0, hi: 120.0 },
            &settings(),
        )
        .unwrap();
        assert!(!out.converged);
        assert_eq!(out.iterations, 0);
        assert!((out.value - 120.0).abs() < 1e-12, "closest endpoint wins");
    }

    #[test]
    fn immediate_convergence_at_endpoint() {
        let out = bisect(
            |trial| Ok(Residual { computed: 100.0, target: trial }),
            Bracket { lo: 100.0, hi: 200.0 },
            &settings(),
        )
        .unwrap();
        assert!(out.converged);
        assert_eq!(out.iterations, 0);
        assert!((out.value - 100.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_bracket_is_rejected() {
        let r = bisect(
            |trial| Ok(Residual { computed: 0.0, target: trial }),
            Bracket { lo: 5.0, hi: 5.0 },
            &settings(),
        );
        assert!(r.is_err());
    }
}
