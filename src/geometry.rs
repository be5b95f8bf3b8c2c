use ncollide2d::na::Point2;

pub mod panels;
pub mod transform;

use panels::PanelGeometry;

/// Return the distance between two 2D points
pub fn dist(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (a - b).norm()
}

/// True when two points coincide within the tolerance on both axes
pub fn coincident(a: &Point2<f64>, b: &Point2<f64>, tol: f64) -> bool {
    (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol
}

/// An ordered sequence of airfoil boundary nodes, logically circular. The
/// convention is normalized chord coordinates: trailing edge at (1, 0),
/// nodes proceeding clockwise over the upper surface through the leading
/// edge at (0, 0) and back along the lower surface. Once validated, the
/// first and last nodes coincide and a node sits exactly at the leading
/// edge.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSet {
    pub nodes: Vec<Point2<f64>>,
}

impl CoordinateSet {
    pub fn from_points(points: &[Point2<f64>]) -> CoordinateSet {
        CoordinateSet {
            nodes: points.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_closed(&self, tol: f64) -> bool {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => self.nodes.len() > 1 && coincident(first, last, tol),
            _ => false,
        }
    }

    /// Index of the first node lying within the tolerance of the leading
    /// edge (0, 0), if any
    pub fn leading_edge_index(&self, tol: f64) -> Option<usize> {
        self.nodes
            .iter()
            .position(|p| p.x.abs() <= tol && p.y.abs() <= tol)
    }

    /// Index of the node with the smallest x coordinate, the natural
    /// candidate for the leading edge on a chord-normalized foil. Ties keep
    /// the earliest node.
    pub fn min_x_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in self.nodes.iter().enumerate() {
            match best {
                Some((_, x)) if p.x >= x => {}
                _ => best = Some((i, p.x)),
            }
        }
        best.map(|(i, _)| i)
    }
}

/// The two representations the validation pipeline accepts. A raw node
/// sequence comes straight from a loader or generator; a panel geometry has
/// already been segmented for a panel-method solver. Using a closed enum
/// (rather than runtime type inspection) makes an unsupported representation
/// impossible to construct.
#[derive(Debug, Clone)]
pub enum Airfoil {
    Nodes(CoordinateSet),
    Panels(PanelGeometry),
}

impl Airfoil {
    pub fn as_nodes(&self) -> Option<&CoordinateSet> {
        match self {
            Airfoil::Nodes(set) => Some(set),
            Airfoil::Panels(_) => None,
        }
    }

    pub fn as_panels(&self) -> Option<&PanelGeometry> {
        match self {
            Airfoil::Nodes(_) => None,
            Airfoil::Panels(geo) => Some(geo),
        }
    }
}
