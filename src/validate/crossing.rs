use crate::algorithms::preceding_index_search;
use crate::geometry::panels::PanelGeometry;
use crate::geometry::{Airfoil, CoordinateSet};
use crate::validate::{CheckOutcome, Correction, Tolerances};

/// Ensure the lower surface never rises to within the minimum separation of
/// the upper surface. The curve is split at the leading-edge node; by the
/// clockwise-from-trailing-edge convention the first half is the upper
/// surface. An offending lower node is moved straight down to the
/// separation limit at its own chordwise position, so the repair never
/// leaves the node's neighborhood and cannot scramble the ordering.
pub fn ensure_no_crossing(foil: &mut Airfoil, tol: &Tolerances) -> CheckOutcome {
    match foil {
        Airfoil::Nodes(set) => repair_nodes(set, tol),
        Airfoil::Panels(geo) => repair_panels(geo, tol),
    }
}

fn repair_nodes(set: &mut CoordinateSet, tol: &Tolerances) -> CheckOutcome {
    let le = match set
        .leading_edge_index(tol.nodes_tol)
        .or_else(|| set.min_x_index())
    {
        Some(i) => i,
        None => return CheckOutcome::Ok,
    };
    if le == 0 || le + 1 >= set.len() {
        // No split is possible; nothing to compare
        return CheckOutcome::Ok;
    }

    // Upper surface samples, ascending in x for interpolation
    let mut upper: Vec<(f64, f64)> = set.nodes[..=le].iter().map(|p| (p.x, p.y)).collect();
    upper.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    let xs: Vec<f64> = upper.iter().map(|s| s.0).collect();
    let ys: Vec<f64> = upper.iter().map(|s| s.1).collect();

    let sep = tol.auto_cross_min_sep;
    let mut corrections = Vec::new();

    // Interior lower-surface nodes; the shared edges are exempt
    for index in (le + 1)..(set.len() - 1) {
        let node = set.nodes[index];
        if node.x <= sep || node.x >= 1.0 - sep {
            continue;
        }

        let y_upper = surface_y_at(&xs, &ys, node.x);
        if node.y >= y_upper - sep {
            // Land strictly past the limit so a repaired node no longer
            // trips the detector on a later run
            set.nodes[index].y = y_upper - sep - tol.nodes_tol;
            corrections.push(Correction::CrossingRepaired { index });
        }
    }

    CheckOutcome::from_corrections(corrections)
}

fn repair_panels(geo: &mut PanelGeometry, tol: &Tolerances) -> CheckOutcome {
    let mut set = geo.to_coordinates();
    let outcome = repair_nodes(&mut set, tol);
    if outcome.was_corrected() {
        geo.set_coordinates(&set);
        geo.compute_parameters();
    }
    outcome
}

/// Linear interpolation of a surface at a chordwise position, clamped to
/// the sampled range
fn surface_y_at(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    if xs.len() < 2 {
        return ys.first().copied().unwrap_or(0.0);
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[xs.len() - 1] {
        return ys[ys.len() - 1];
    }

    let i = preceding_index_search(xs, x).min(xs.len() - 2);
    let span = xs[i + 1] - xs[i];
    if span <= f64::EPSILON {
        ys[i]
    } else {
        ys[i] + (ys[i + 1] - ys[i]) * (x - xs[i]) / span
    }
}
