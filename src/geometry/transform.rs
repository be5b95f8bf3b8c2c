use crate::algorithms::preceding_index_search;
use crate::errors::ValidationError;
use crate::geometry::{dist, CoordinateSet};
use itertools::Itertools;
use ncollide2d::na::{Isometry2, Point2};

/// Redistribute a node sequence to `n` nodes evenly spaced by arc length
/// along the polygonal boundary. The first and last nodes are preserved
/// exactly, so a closed input stays closed. Interior structure such as the
/// exact leading-edge node is not preserved; resampled curves should be
/// passed back through validation before use.
pub fn resample(set: &CoordinateSet, n: usize) -> Result<CoordinateSet, ValidationError> {
    if set.len() < 2 || n < 3 {
        return Err(ValidationError::NotEnoughPoints);
    }

    let mut lengths: Vec<f64> = vec![0.0];
    for (a, b) in set.nodes.iter().tuple_windows() {
        lengths.push(dist(a, b) + lengths.last().unwrap_or(&0.0));
    }
    let total = *lengths.last().unwrap_or(&0.0);

    let mut nodes: Vec<Point2<f64>> = Vec::with_capacity(n);
    nodes.push(set.nodes[0]);
    for k in 1..n - 1 {
        let l = total * k as f64 / (n - 1) as f64;
        let i = preceding_index_search(&lengths, l).min(set.len() - 2);
        let span = lengths[i + 1] - lengths[i];
        let f = if span <= f64::EPSILON {
            0.0
        } else {
            (l - lengths[i]) / span
        };
        let p = set.nodes[i];
        nodes.push(p + (set.nodes[i + 1] - p) * f);
    }
    nodes.push(*set.nodes.last().unwrap());

    Ok(CoordinateSet { nodes })
}

/// Rigid rotation of every node about an arbitrary reference point, e.g.
/// the quarter-chord when setting an angle of attack. Angle in radians,
/// positive counterclockwise.
pub fn rotate_about(set: &mut CoordinateSet, center: &Point2<f64>, angle: f64) {
    let iso = Isometry2::rotation(angle);
    for p in set.nodes.iter_mut() {
        *p = *center + iso * (*p - center);
    }
}
