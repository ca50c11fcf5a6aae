//! Surface topologies realisable by identifying a square grid's boundary.

use std::fmt;

/// How a seam glues one side of the fundamental region to the opposite side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Seam {
    /// Row (or column) `i` is glued to row (or column) `i`.
    Straight,
    /// Row (or column) `i` is glued to row (or column) `size - 1 - i`.
    Reversed,
}

/// The surface a square grid is embedded on.
///
/// The plane leaves the boundary free; every other topology identifies the
/// vertical seam (last column to first), the horizontal seam (last row to
/// first), or both, each either straight or reversed. The sphere instead
/// closes the horizontal boundary with two pole vertices.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SurfaceTopology {
    /// Flat grid, free boundary (a disc).
    Plane,
    /// Straight vertical seam only.
    Cylinder,
    /// Straight vertical and horizontal seams.
    Torus,
    /// Reversed vertical seam only.
    MoebiusBand,
    /// Straight vertical seam, reversed horizontal seam.
    KleinBottle,
    /// Both seams reversed.
    ProjectivePlane,
    /// Straight vertical seam plus north and south pole vertices.
    Sphere,
}

impl SurfaceTopology {
    /// Returns the lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Cylinder => "cylinder",
            Self::Torus => "torus",
            Self::MoebiusBand => "moebius-band",
            Self::KleinBottle => "klein-bottle",
            Self::ProjectivePlane => "projective-plane",
            Self::Sphere => "sphere",
        }
    }

    /// How the last column is glued to the first, if at all.
    pub(crate) const fn vertical_seam(self) -> Option<Seam> {
        match self {
            Self::Plane => None,
            Self::Cylinder | Self::Torus | Self::KleinBottle | Self::Sphere => Some(Seam::Straight),
            Self::MoebiusBand | Self::ProjectivePlane => Some(Seam::Reversed),
        }
    }

    /// How the last row is glued to the first, if at all.
    pub(crate) const fn horizontal_seam(self) -> Option<Seam> {
        match self {
            Self::Plane | Self::Cylinder | Self::MoebiusBand | Self::Sphere => None,
            Self::Torus => Some(Seam::Straight),
            Self::KleinBottle | Self::ProjectivePlane => Some(Seam::Reversed),
        }
    }

    /// Whether the topology appends pole vertices above the first row and
    /// below the last.
    pub(crate) const fn has_poles(self) -> bool {
        matches!(self, Self::Sphere)
    }

    /// Smallest grid side the topology supports. Seams on a 1-wide grid
    /// would glue a vertex to itself, which the matrix invariant forbids.
    #[must_use]
    pub const fn minimum_size(self) -> usize {
        match self {
            Self::Plane => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for SurfaceTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
