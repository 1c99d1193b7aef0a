//! Honeycomb layout for the 7-hexagon microlens reference cluster.
//!
//! The cluster is one center hexagon surrounded by a ring of six, with a
//! configurable padding between adjacent hexagons. Everything derives from
//! two facts about regular hexagons: the circumradius equals the side
//! length, and the perpendicular half-width (the *bisector*) is √3/2 times
//! the side, since the hexagon is six equilateral triangles.
//!
//! Coordinates are physical units (arcseconds) with the cluster's local
//! origin at its top-left bounding corner; the conversion factor maps them
//! into the square pixel sampling region.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use crate::geometry::Point;
use crate::hexagon::{IdCounter, PlacedHexagon, RegularHexagon};

/// Index of the true-center hexagon in the cluster's ordered center list.
pub const CENTER_INDEX: usize = 3;

/// Validation failure for cluster parameters.
///
/// Invalid input always surfaces to the caller; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    NonPositiveSide(f64),
    NegativePadding(f64),
    NonPositiveSampleArea(f64),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NonPositiveSide(side) => {
                write!(f, "hexagon side length must be positive, got {}", side)
            }
            LayoutError::NegativePadding(padding) => {
                write!(f, "padding must be zero or positive, got {}", padding)
            }
            LayoutError::NonPositiveSampleArea(size) => {
                write!(f, "sample area size must be positive, got {}", size)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Perpendicular distance from a regular hexagon's center to the midpoint
/// of one side.
#[inline]
pub fn bisector(side: f64) -> f64 {
    3.0_f64.sqrt() / 2.0 * side
}

/// The computed cluster: seven hexagon centers plus the unit conversion.
///
/// Centers are in physical units; [`HoneycombCluster::place`] turns them
/// into pixel-space hexagons.
#[derive(Debug, Clone)]
pub struct HoneycombCluster {
    side: f64,
    padding: f64,
    sample_area: f64,
    centers: Vec<Point>,
    conversion: f64,
    pixel_radius: f64,
}

/// Compute the 7-hexagon cluster for a side length and padding (both in
/// physical units) and a square sampling region `sample_area` pixels wide.
///
/// The horizontal line through the cluster center spans two bisectors (the
/// outer halves of the left and right ring hexagons) plus four padded
/// bisectors, which fixes the physical width of the world and therefore the
/// conversion factor from physical units to pixels.
pub fn compute_cluster(
    side: f64,
    padding: f64,
    sample_area: f64,
) -> Result<HoneycombCluster, LayoutError> {
    if side <= 0.0 {
        return Err(LayoutError::NonPositiveSide(side));
    }
    if padding < 0.0 {
        return Err(LayoutError::NegativePadding(padding));
    }
    if sample_area <= 0.0 {
        return Err(LayoutError::NonPositiveSampleArea(sample_area));
    }

    let b = bisector(side);
    let padded_bisector = bisector(side + padding);
    let padded_radius = side + padding;

    let world_width = 2.0 * b + 4.0 * padded_bisector;
    let conversion = sample_area / world_width;

    // First row, middle row, last row. The middle entry of the middle row
    // is the true center of the cluster (CENTER_INDEX).
    let centers = vec![
        Point::new(b + padded_bisector, side),
        Point::new(b + 3.0 * padded_bisector, side),
        Point::new(b, padded_radius + side / 2.0),
        Point::new(b + 2.0 * padded_bisector, padded_radius + side / 2.0),
        Point::new(b + 4.0 * padded_bisector, padded_radius + side / 2.0),
        Point::new(b + padded_bisector, 2.0 * padded_radius),
        Point::new(b + 3.0 * padded_bisector, 2.0 * padded_radius),
    ];

    Ok(HoneycombCluster {
        side,
        padding,
        sample_area,
        centers,
        conversion,
        pixel_radius: side * conversion,
    })
}

impl HoneycombCluster {
    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }

    #[inline]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[inline]
    pub fn sample_area(&self) -> f64 {
        self.sample_area
    }

    /// Hexagon centers in physical units, ordered row by row.
    #[inline]
    pub fn centers(&self) -> &[Point] {
        &self.centers
    }

    /// Pixels per physical unit.
    #[inline]
    pub fn conversion(&self) -> f64 {
        self.conversion
    }

    /// Hexagon circumradius in pixels: the physical side length times the
    /// conversion factor, since circumradius and side are equal.
    #[inline]
    pub fn pixel_radius(&self) -> f64 {
        self.pixel_radius
    }

    /// Place the seven hexagons in pixel space.
    ///
    /// Each center is scaled by the conversion factor and offset by
    /// `origin` (the sampling region's top-left corner, including any outer
    /// margin the presentation layer adds). Every hexagon is rotated by
    /// π/2 from the canonical orientation and uniformly scaled to its pixel
    /// circumradius. Output order matches [`HoneycombCluster::centers`].
    pub fn place(&self, origin: Point, ids: &mut IdCounter) -> Vec<PlacedHexagon> {
        self.centers
            .iter()
            .map(|c| {
                let translation = Point::new(
                    origin.x + c.x * self.conversion,
                    origin.y + c.y * self.conversion,
                );
                RegularHexagon::new(ids).place(
                    translation,
                    FRAC_PI_2,
                    self.pixel_radius,
                    self.pixel_radius,
                )
            })
            .collect()
    }
}
