use approx::assert_relative_eq;
use foilprep::errors::ValidationError;
use foilprep::geometry::panels::PanelGeometry;
use foilprep::geometry::{Airfoil, CoordinateSet};
use foilprep::validate::{validate, CheckOutcome, Correction, Tolerances, ValidationReport};
use ncollide2d::na::Point2;

fn sample_points(p: &[(f64, f64)]) -> Vec<Point2<f64>> {
    p.iter().map(|(a, b)| Point2::new(*a, *b)).collect()
}

fn node_foil(p: &[(f64, f64)]) -> Airfoil {
    Airfoil::Nodes(CoordinateSet::from_points(&sample_points(p)))
}

fn canonical_foil() -> Vec<(f64, f64)> {
    vec![
        (1.0, 0.0),
        (0.75, 0.06),
        (0.5, 0.08),
        (0.25, 0.06),
        (0.0, 0.0),
        (0.25, -0.06),
        (0.5, -0.08),
        (0.75, -0.06),
        (1.0, 0.0),
    ]
}

#[test]
fn closed_curve_without_leading_edge_gets_one() {
    // Already closed, but the closest candidates to (0, 0) are at x = 0.5
    let mut foil = node_foil(&[(1.0, 0.0), (0.5, 0.08), (0.5, -0.08), (1.0, 0.0)]);
    let report = validate(&mut foil, &Tolerances::default()).unwrap();

    assert_eq!(
        CheckOutcome::Corrected(vec![Correction::LeadingEdgeSnapped { index: 1 }]),
        report.closure
    );

    let set = foil.as_nodes().unwrap();
    assert_eq!(Some(1), set.leading_edge_index(1e-8));
    assert_relative_eq!(0.0, set.nodes[1].x, epsilon = 1e-12);
    assert_relative_eq!(0.0, set.nodes[1].y, epsilon = 1e-12);
}

#[test]
fn open_curve_is_closed_and_leading_edge_passes_unchanged() {
    let mut foil = node_foil(&[(1.0, 0.0), (0.5, 0.08), (0.0, 0.0), (0.5, -0.08)]);
    let report = validate(&mut foil, &Tolerances::default()).unwrap();

    assert_eq!(
        CheckOutcome::Corrected(vec![Correction::CurveClosed]),
        report.closure
    );

    let set = foil.as_nodes().unwrap();
    assert_eq!(5, set.len());
    assert!(set.is_closed(1e-8));
    assert_eq!(Some(2), set.leading_edge_index(1e-8));
}

#[test]
fn crossed_surfaces_are_flagged_and_separated() {
    let mut foil = node_foil(&[
        (1.0, 0.0),
        (0.3, -0.01),
        (0.0, 0.0),
        (0.3, 0.02),
        (1.0, 0.0),
    ]);
    let report = validate(&mut foil, &Tolerances::default()).unwrap();

    assert_eq!(
        CheckOutcome::Corrected(vec![Correction::CrossingRepaired { index: 3 }]),
        report.crossing
    );

    // The lower node was pushed strictly below the upper surface minus the
    // minimum separation: y_upper(0.3) = -0.01
    let set = foil.as_nodes().unwrap();
    assert_relative_eq!(-0.011 - 1e-8, set.nodes[3].y, epsilon = 1e-12);
}

#[test]
fn crossing_repair_reaches_a_fix_point() {
    let mut foil = node_foil(&[
        (1.0, 0.0),
        (0.5, 0.08),
        (0.0, 0.0),
        (0.5, 0.0795),
        (1.0, 0.0),
    ]);
    let tol = Tolerances::default();

    let first = validate(&mut foil, &tol).unwrap();
    assert!(first.crossing.was_corrected());

    let second = validate(&mut foil, &tol).unwrap();
    assert_eq!(CheckOutcome::Ok, second.crossing);
    assert!(!second.was_corrected());
}

#[test]
fn scrambled_ordering_halts_the_pipeline() {
    let mut foil = node_foil(&[
        (1.0, 0.0),
        (0.5, 0.08),
        (0.0, 0.0),
        (0.7, 0.05),
        (0.5, -0.08),
        (1.0, 0.0),
    ]);
    assert_eq!(
        Err(ValidationError::NotOrdered { index: 4 }),
        validate(&mut foil, &Tolerances::default())
    );
}

#[test]
fn canonical_foil_passes_untouched() {
    let mut foil = node_foil(&canonical_foil());
    let report = validate(&mut foil, &Tolerances::default()).unwrap();

    assert_eq!(
        ValidationReport {
            closure: CheckOutcome::Ok,
            crossing: CheckOutcome::Ok,
        },
        report
    );
    assert!(!report.was_corrected());
    assert_eq!(sample_points(&canonical_foil()), foil.as_nodes().unwrap().nodes);
}

#[test]
fn validation_is_deterministic() {
    let run = || {
        let mut foil = node_foil(&[(1.0, 0.0), (0.5, 0.08), (0.5, -0.08)]);
        let report = validate(&mut foil, &Tolerances::default()).unwrap();
        (report, foil.as_nodes().unwrap().clone())
    };

    let (report_a, nodes_a) = run();
    let (report_b, nodes_b) = run();
    assert_eq!(report_a, report_b);
    assert_eq!(nodes_a, nodes_b);
}

#[test]
fn validation_is_idempotent() {
    let mut foil = node_foil(&[(1.0, 0.0), (0.5, 0.08), (0.5, -0.08)]);
    let tol = Tolerances::default();

    validate(&mut foil, &tol).unwrap();
    let once = foil.as_nodes().unwrap().clone();

    let report = validate(&mut foil, &tol).unwrap();
    assert!(!report.was_corrected());
    assert_eq!(once, *foil.as_nodes().unwrap());
}

#[test]
fn validated_output_satisfies_all_invariants() {
    let mut foil = node_foil(&[
        (1.0, 0.0),
        (0.75, 0.055),
        (0.5, 0.08),
        (0.25, 0.065),
        (0.02, 0.01),
        (0.25, -0.065),
        (0.5, -0.08),
        (0.75, -0.055),
    ]);
    let tol = Tolerances::default();
    validate(&mut foil, &tol).unwrap();

    let set = foil.as_nodes().unwrap();
    assert!(set.is_closed(tol.nodes_tol));
    assert!(set.leading_edge_index(tol.nodes_tol).is_some());

    // Re-running every stage individually reports nothing left to fix
    let mut again = Airfoil::Nodes(set.clone());
    let report = validate(&mut again, &tol).unwrap();
    assert!(!report.was_corrected());
}

#[test]
fn panel_geometry_runs_the_same_pipeline() {
    let set = CoordinateSet::from_points(&sample_points(&[
        (1.0, 0.0),
        (0.5, 0.08),
        (0.01, 0.002),
        (0.5, -0.08),
    ]));
    let mut foil = Airfoil::Panels(PanelGeometry::from_nodes(&set, 1e-8).unwrap());
    let report = validate(&mut foil, &Tolerances::default()).unwrap();

    assert_eq!(
        CheckOutcome::Corrected(vec![Correction::LeadingEdgeSnapped { index: 2 }]),
        report.closure
    );

    let geo = foil.as_panels().unwrap();
    assert!(geo.is_closed(1e-8));
    assert_relative_eq!(0.0, geo.panels[2].start.x, epsilon = 1e-12);
    assert_relative_eq!(0.0, geo.panels[2].start.y, epsilon = 1e-12);
    assert_relative_eq!(1.0, geo.chord(), epsilon = 1e-12);
}

#[test]
fn report_serializes_for_logging() {
    let mut foil = node_foil(&[(1.0, 0.0), (0.5, 0.08), (0.0, 0.0), (0.5, -0.08)]);
    let report = validate(&mut foil, &Tolerances::default()).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("CurveClosed"));
}
