use foilprep::geometry::{Airfoil, CoordinateSet};
use foilprep::validate::{validate, Tolerances};
use ncollide2d::na::Point2;

fn main() {
    // A deliberately sloppy input: open at the trailing edge and with no
    // node at the leading edge
    let points = vec![
        Point2::new(1.0, 0.0),
        Point2::new(0.75, 0.055),
        Point2::new(0.5, 0.08),
        Point2::new(0.25, 0.065),
        Point2::new(0.02, 0.01),
        Point2::new(0.25, -0.065),
        Point2::new(0.5, -0.08),
        Point2::new(0.75, -0.055),
    ];

    let mut foil = Airfoil::Nodes(CoordinateSet::from_points(&points));
    match validate(&mut foil, &Tolerances::default()) {
        Ok(report) => {
            let json = serde_json::to_string_pretty(&report).expect("Failed serializing report");
            println!("{}", json);
        }
        Err(e) => {
            eprintln!("validation failed: {}", e);
            std::process::exit(1);
        }
    }
}
