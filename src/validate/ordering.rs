use crate::errors::ValidationError;
use crate::geometry::Airfoil;
use crate::validate::Tolerances;
use itertools::Itertools;

/// Certify that the stored order walks the perimeter clockwise from the
/// trailing edge: x strictly decreasing to the leading edge, one reversal
/// there, then strictly increasing back. A violation is fatal — reordering
/// nodes could silently produce a differently shaped foil, so the decision
/// is left to the caller.
pub fn ensure_ordered(foil: &Airfoil, tol: &Tolerances) -> Result<(), ValidationError> {
    let xs: Vec<f64> = match foil {
        Airfoil::Nodes(set) => {
            let mut xs: Vec<f64> = set.nodes.iter().map(|p| p.x).collect();
            // The duplicate closing node is outside the walk
            if set.is_closed(tol.nodes_tol) {
                xs.pop();
            }
            xs
        }
        Airfoil::Panels(geo) => geo.panels.iter().map(|p| p.start.x).collect(),
    };

    walk(&xs, tol)
}

fn walk(xs: &[f64], tol: &Tolerances) -> Result<(), ValidationError> {
    if xs.len() < 3 {
        return Err(ValidationError::NotEnoughPoints);
    }

    // The walk must set out from the trailing edge of a chord-normalized
    // foil
    if (xs[0] - 1.0).abs() > tol.nodes_tol {
        return Err(ValidationError::NotOrdered { index: 0 });
    }

    let mut reversed = false;
    for (i, (a, b)) in xs.iter().tuple_windows().enumerate() {
        if !reversed {
            if b < a {
                continue;
            }
            if b == a {
                // Duplicated chordwise position within a surface
                return Err(ValidationError::NotOrdered { index: i + 1 });
            }
            // First reversal must sit at the leading edge
            if a.abs() > tol.nodes_tol {
                return Err(ValidationError::NotOrdered { index: i });
            }
            reversed = true;
        } else if b <= a {
            // A second reversal, or a backward jump on the return surface
            return Err(ValidationError::NotOrdered { index: i + 1 });
        }
    }

    if !reversed {
        // Never turned around: this cannot be a perimeter walk
        return Err(ValidationError::NotOrdered { index: xs.len() - 1 });
    }

    Ok(())
}
