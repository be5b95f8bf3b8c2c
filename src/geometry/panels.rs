use crate::errors::ValidationError;
use crate::geometry::{coincident, dist, CoordinateSet};
use crate::serialize::Point2f64;
use itertools::Itertools;
use ncollide2d::na::Point2;
use serde::Serialize;

/// A straight segment of the airfoil boundary between two consecutive
/// nodes. Panels are owned by a PanelGeometry and addressed by `position`;
/// panel i's end must coincide with panel (i + 1) % n_panels' start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub position: usize,

    #[serde(with = "Point2f64")]
    pub start: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub end: Point2<f64>,
}

impl Panel {
    pub fn new(position: usize, start: Point2<f64>, end: Point2<f64>) -> Panel {
        Panel {
            position,
            start,
            end,
        }
    }

    /// Midpoint of the panel, used as the collocation point by downstream
    /// panel-method solvers
    pub fn control_point(&self) -> Point2<f64> {
        Point2::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    pub fn length(&self) -> f64 {
        dist(&self.start, &self.end)
    }
}

/// The segmented representation of an airfoil boundary. Owns its panel
/// sequence along with derived parameters (chord length, collocation
/// points, a cumulative length table). The derived parameters are only
/// meaningful after `compute_parameters`, which must run once after any
/// structural mutation of panel coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct PanelGeometry {
    pub n_panels: usize,
    pub panels: Vec<Panel>,
    chord: f64,

    #[serde(skip)]
    control_points: Vec<Point2<f64>>,

    #[serde(skip)]
    lengths: Vec<f64>,
}

impl PanelGeometry {
    /// Build panels from a node sequence, one panel per consecutive node
    /// pair. A duplicate closing node is dropped first; the final panel
    /// always wraps back to the first node regardless.
    pub fn from_nodes(set: &CoordinateSet, tol: f64) -> Result<PanelGeometry, ValidationError> {
        let mut vertices = set.nodes.clone();
        if set.is_closed(tol) {
            vertices.pop();
        }

        if vertices.len() < 3 {
            return Err(ValidationError::NotEnoughPoints);
        }

        let n = vertices.len();
        let panels = (0..n)
            .map(|i| Panel::new(i, vertices[i], vertices[(i + 1) % n]))
            .collect();

        let mut geo = PanelGeometry {
            n_panels: n,
            panels,
            chord: 0.0,
            control_points: Vec::new(),
            lengths: Vec::new(),
        };
        geo.compute_parameters();
        Ok(geo)
    }

    /// Recompute the derived aerodynamic descriptors from the current panel
    /// coordinates
    pub fn compute_parameters(&mut self) {
        self.chord = match self.panels.iter().map(|p| p.start.x).minmax().into_option() {
            Some((min, max)) => max - min,
            None => 0.0,
        };

        self.control_points = self.panels.iter().map(|p| p.control_point()).collect();

        self.lengths = vec![0.0];
        for p in self.panels.iter() {
            let d = p.length() + self.lengths.last().unwrap_or(&0.0);
            self.lengths.push(d);
        }
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }

    pub fn control_points(&self) -> &[Point2<f64>] {
        &self.control_points
    }

    pub fn perimeter(&self) -> f64 {
        *self.lengths.last().unwrap_or(&0.0)
    }

    /// The node sequence equivalent to this geometry: every panel start,
    /// closed with a copy of the first start
    pub fn to_coordinates(&self) -> CoordinateSet {
        let mut nodes: Vec<Point2<f64>> = self.panels.iter().map(|p| p.start).collect();
        if let Some(first) = nodes.first().copied() {
            nodes.push(first);
        }
        CoordinateSet { nodes }
    }

    /// Replace the panel nodes from a closed coordinate sequence of
    /// n_panels + 1 nodes, keeping shared endpoints coincident. Callers are
    /// expected to follow with `compute_parameters`.
    pub(crate) fn set_coordinates(&mut self, set: &CoordinateSet) {
        for (i, panel) in self.panels.iter_mut().enumerate() {
            panel.start = set.nodes[i];
            panel.end = set.nodes[i + 1];
        }
    }

    /// Invariant check: every panel's end meets its successor's start, the
    /// last panel wrapping around to panel 0
    pub fn is_closed(&self, tol: f64) -> bool {
        self.panels.iter().enumerate().all(|(i, p)| {
            coincident(&p.end, &self.panels[(i + 1) % self.n_panels].start, tol)
        })
    }
}
