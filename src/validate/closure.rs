use crate::geometry::panels::PanelGeometry;
use crate::geometry::{coincident, Airfoil, CoordinateSet};
use crate::validate::{CheckOutcome, Correction, Tolerances};
use ncollide2d::na::Point2;

/// Ensure the airfoil is a closed (Jordan) polygon with a node exactly at
/// the leading edge. Both defects are recoverable: an open curve gains a
/// duplicate of its first node, and a missing leading edge is created by
/// snapping the minimum-x node to (0, 0).
pub fn ensure_closed(foil: &mut Airfoil, tol: &Tolerances) -> CheckOutcome {
    match foil {
        Airfoil::Nodes(set) => close_nodes(set, tol),
        Airfoil::Panels(geo) => close_panels(geo, tol),
    }
}

fn close_nodes(set: &mut CoordinateSet, tol: &Tolerances) -> CheckOutcome {
    if set.is_empty() {
        return CheckOutcome::Ok;
    }

    let mut corrections = Vec::new();

    if !set.is_closed(tol.nodes_tol) {
        let first = set.nodes[0];
        set.nodes.push(first);
        corrections.push(Correction::CurveClosed);
    }

    if set.leading_edge_index(tol.nodes_tol).is_none() {
        if let Some(index) = set.min_x_index() {
            set.nodes[index] = Point2::origin();
            // Snapping an endpoint must move its closing duplicate too
            let last = set.len() - 1;
            if index == 0 {
                set.nodes[last] = Point2::origin();
            } else if index == last {
                set.nodes[0] = Point2::origin();
            }
            corrections.push(Correction::LeadingEdgeSnapped { index });
        }
    }

    CheckOutcome::from_corrections(corrections)
}

fn close_panels(geo: &mut PanelGeometry, tol: &Tolerances) -> CheckOutcome {
    let n = geo.n_panels;
    if n == 0 {
        return CheckOutcome::Ok;
    }

    let mut corrections = Vec::new();

    for i in 0..n {
        let next_start = geo.panels[(i + 1) % n].start;
        if !coincident(&geo.panels[i].end, &next_start, tol.nodes_tol) {
            // The successor's start is authoritative
            geo.panels[i].end = next_start;
            corrections.push(Correction::PanelGapClosed { position: i });
        }
    }

    let has_le = geo.panels.iter().any(|p| p.start.x.abs() <= tol.nodes_tol);
    if !has_le {
        let mut index = 0;
        for (i, p) in geo.panels.iter().enumerate() {
            if p.start.x < geo.panels[index].start.x {
                index = i;
            }
        }
        geo.panels[index].start = Point2::origin();
        geo.panels[(index + n - 1) % n].end = Point2::origin();
        corrections.push(Correction::LeadingEdgeSnapped { index });
    }

    if !corrections.is_empty() {
        geo.compute_parameters();
    }

    CheckOutcome::from_corrections(corrections)
}
