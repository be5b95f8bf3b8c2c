use crate::errors::ValidationError;
use crate::geometry::Airfoil;
use serde::Serialize;

pub mod closure;
pub mod crossing;
pub mod ordering;

/// Tolerances governing the validation pipeline, injected per call rather
/// than read from module globals so they can be overridden and tested.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tolerances {
    /// Two nodes closer than this on both axes are considered coincident
    pub nodes_tol: f64,

    /// Minimum vertical separation the upper and lower surfaces must keep
    /// away from the shared leading and trailing edges
    pub auto_cross_min_sep: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            nodes_tol: 1e-8,
            auto_cross_min_sep: 1e-3,
        }
    }
}

/// A single corrective action applied to the in-flight geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Correction {
    /// The endpoints did not coincide; a copy of the first node was
    /// appended to close the curve
    CurveClosed,

    /// No node sat at the leading edge; the minimum-x node or panel start
    /// was snapped to exactly (0, 0)
    LeadingEdgeSnapped { index: usize },

    /// A panel's end did not meet its successor's start and was snapped
    /// onto it
    PanelGapClosed { position: usize },

    /// A lower-surface node violated the minimum separation from the upper
    /// surface and was moved down to restore it
    CrossingRepaired { index: usize },
}

/// Outcome of one pipeline stage, returned by value. `Corrected` carries
/// the full list of fixes so callers can log exactly what was adjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CheckOutcome {
    Ok,
    Corrected(Vec<Correction>),
}

impl CheckOutcome {
    pub fn from_corrections(corrections: Vec<Correction>) -> CheckOutcome {
        if corrections.is_empty() {
            CheckOutcome::Ok
        } else {
            CheckOutcome::Corrected(corrections)
        }
    }

    pub fn was_corrected(&self) -> bool {
        matches!(self, CheckOutcome::Corrected(_))
    }
}

/// Per-stage outcomes of a successful validation run. Corrections are
/// informational; an input reported here has already been normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub closure: CheckOutcome,
    pub crossing: CheckOutcome,
}

impl ValidationReport {
    pub fn was_corrected(&self) -> bool {
        self.closure.was_corrected() || self.crossing.was_corrected()
    }
}

/// Run the full validation pipeline on an airfoil in place: close the
/// curve and pin the leading edge, repair surface crossings, then certify
/// the perimeter ordering. The first two stages recover locally and report
/// their corrections; an ordering violation cannot be repaired without
/// changing the shape and aborts with a typed error. On success the
/// returned geometry satisfies all three invariants simultaneously.
pub fn validate(
    foil: &mut Airfoil,
    tol: &Tolerances,
) -> Result<ValidationReport, ValidationError> {
    let closure = closure::ensure_closed(foil, tol);
    let crossing = crossing::ensure_no_crossing(foil, tol);
    ordering::ensure_ordered(foil, tol)?;

    Ok(ValidationReport { closure, crossing })
}
