use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A panel geometry needs at least three nodes to enclose any area
    NotEnoughPoints,

    /// The perimeter walk is not monotonic clockwise-from-trailing-edge; the
    /// index identifies the first node at which the walk breaks. Reordering
    /// nodes could silently produce a differently shaped foil, so this is
    /// fatal rather than auto-corrected.
    NotOrdered { index: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotEnoughPoints => {
                write!(f, "at least three nodes are required to form a closed curve")
            }
            ValidationError::NotOrdered { index } => {
                write!(
                    f,
                    "airfoil nodes are not ordered clockwise from the trailing edge \
                     (walk breaks at node {}); cannot be corrected automatically",
                    index
                )
            }
        }
    }
}

impl Error for ValidationError {}
