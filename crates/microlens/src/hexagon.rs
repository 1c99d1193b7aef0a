//! Regular hexagon primitive: construction, affine placement, containment.
//!
//! A regular hexagon is six equilateral triangles around a central point, so
//! its circumradius equals its side length. The canonical hexagon here is
//! centered at the origin with circumradius 1 and a vertex at angle 0; the
//! remaining five vertices follow by successive rotations of 60 degrees.
//! Affine transforms place copies of it anywhere in pixel space.

use std::f64::consts::FRAC_PI_3;

use lyon_geom::{point, Angle, Rotation, Transform};

use crate::geometry::Point;

/// Display palette, indexed by hexagon identifier modulo the palette size.
///
/// CSS color names so the values drop straight into SVG attributes.
pub const PALETTE: [&str; 10] = [
    "green", "blue", "magenta", "yellow", "red",
    "white", "pink", "gray", "orange", "lightgray",
];

/// Look up the display color for a hexagon identifier.
#[inline]
pub fn palette_color(id: usize) -> &'static str {
    PALETTE[id % PALETTE.len()]
}

/// Hands out monotonically increasing hexagon identifiers.
///
/// Owned by whichever context constructs hexagons (a layout session, a
/// test), so identifier assignment stays reproducible run to run. Ids are
/// never reused within one counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdCounter {
    next: usize,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next identifier.
    #[inline]
    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// The canonical unit regular hexagon: circumradius 1, centered at the
/// origin, vertex 0 at (1, 0), counter-clockwise winding.
///
/// Immutable once constructed. Use [`RegularHexagon::place`] to move it
/// into world space.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularHexagon {
    id: usize,
    vertices: [Point; 6],
}

impl RegularHexagon {
    /// Construct the canonical hexagon, drawing an identifier from `ids`.
    ///
    /// Vertices are generated by repeatedly rotating the initial vertex
    /// (1, 0) by 60 degrees. The polygon is closed implicitly: the edge
    /// from the last vertex back to the first is part of the outline.
    pub fn new(ids: &mut IdCounter) -> Self {
        let rotation = Rotation::radians(FRAC_PI_3);

        let mut vertices = [Point::new(1.0, 0.0); 6];
        let mut p = point(1.0, 0.0);
        for vertex in vertices.iter_mut().skip(1) {
            p = rotation.transform_point(p);
            *vertex = Point::new(p.x, p.y);
        }

        Self { id: ids.next_id(), vertices }
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 6] {
        &self.vertices
    }

    #[inline]
    pub fn color(&self) -> &'static str {
        palette_color(self.id)
    }

    /// Place the hexagon in world space.
    ///
    /// The transform is built translation first, then rotation, then scale,
    /// which means a vertex is scaled, then rotated, then translated. The
    /// build order matters: with non-uniform scale factors, rotating after
    /// scaling produces a different shape than scaling after rotating.
    ///
    /// A scale of zero is allowed and degenerates the hexagon to a point;
    /// containment queries against it never succeed.
    pub fn place(&self, translation: Point, rotation: f64, scale_x: f64, scale_y: f64) -> PlacedHexagon {
        let transform = Transform::translation(translation.x, translation.y)
            .pre_rotate(Angle::radians(rotation))
            .pre_scale(scale_x, scale_y);

        let mut vertices = [Point::new(0.0, 0.0); 6];
        for (out, v) in vertices.iter_mut().zip(&self.vertices) {
            let t = transform.transform_point(point(v.x, v.y));
            *out = Point::new(t.x, t.y);
        }

        PlacedHexagon { id: self.id, center: translation, vertices }
    }
}

/// A hexagon positioned in world/pixel space, read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedHexagon {
    id: usize,
    center: Point,
    vertices: [Point; 6],
}

impl PlacedHexagon {
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The world-space center, i.e. the translation the hexagon was placed
    /// with.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 6] {
        &self.vertices
    }

    #[inline]
    pub fn color(&self) -> &'static str {
        palette_color(self.id)
    }

    /// Test whether a point lies inside the hexagon.
    ///
    /// Even-odd ray casting over the six transformed edges: a horizontal
    /// ray to the right of the point toggles on each crossing. Pure and
    /// O(1) per call.
    ///
    /// Boundary convention: the crossing test is half-open, so a point
    /// exactly on an edge is claimed by at most one of two hexagons sharing
    /// that edge. For the canonical orientation the lower outline tests
    /// inside and the upper outline outside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        let mut inside = false;
        let mut j = 5;

        for i in 0..6 {
            let (xi, yi) = (self.vertices[i].x, self.vertices[i].y);
            let (xj, yj) = (self.vertices[j].x, self.vertices[j].y);

            if ((yi > p.y) != (yj > p.y)) && (p.x < (xj - xi) * (p.y - yi) / (yj - yi) + xi) {
                inside = !inside;
            }

            j = i;
        }

        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    fn canonical() -> RegularHexagon {
        RegularHexagon::new(&mut IdCounter::new())
    }

    /// Canonical hexagon placed at the origin with no rotation or scaling.
    fn identity_placed() -> PlacedHexagon {
        canonical().place(Point::new(0.0, 0.0), 0.0, 1.0, 1.0)
    }

    #[test]
    fn vertices_lie_on_unit_circle() {
        let hex = canonical();
        for v in hex.vertices() {
            let r = (v.x * v.x + v.y * v.y).sqrt();
            assert!((r - 1.0).abs() < EPS, "vertex radius {} != 1", r);
        }
    }

    #[test]
    fn consecutive_vertices_are_sixty_degrees_apart() {
        let hex = canonical();
        for i in 0..6 {
            let a = hex.vertices()[i];
            let b = hex.vertices()[(i + 1) % 6];
            let delta = (b.y.atan2(b.x) - a.y.atan2(a.x)).rem_euclid(2.0 * PI);
            assert!(
                (delta - FRAC_PI_3).abs() < 1e-9,
                "vertex {} -> {} separated by {} rad",
                i,
                (i + 1) % 6,
                delta
            );
        }
    }

    #[test]
    fn identifiers_are_monotonic() {
        let mut ids = IdCounter::new();
        let a = RegularHexagon::new(&mut ids);
        let b = RegularHexagon::new(&mut ids);
        let c = RegularHexagon::new(&mut ids);
        assert_eq!((a.id(), b.id(), c.id()), (0, 1, 2));
    }

    #[test]
    fn palette_wraps_at_ten() {
        assert_eq!(palette_color(0), "green");
        assert_eq!(palette_color(9), "lightgray");
        assert_eq!(palette_color(10), "green");
        assert_eq!(palette_color(23), palette_color(3));
    }

    #[test]
    fn contains_center() {
        let hex = canonical().place(Point::new(450.0, 450.0), FRAC_PI_2, 39.0, 39.0);
        assert!(hex.contains(hex.center()));
    }

    #[test]
    fn rejects_point_beyond_circumradius() {
        let scale = 39.0;
        let hex = canonical().place(Point::new(450.0, 450.0), FRAC_PI_2, scale, scale);
        // Just past the bounding circle in several directions.
        let r = scale * 1.0001;
        for k in 0..8 {
            let theta = k as f64 * PI / 4.0;
            let p = Point::new(450.0 + r * theta.cos(), 450.0 + r * theta.sin());
            assert!(!hex.contains(p), "point at angle {} should be outside", theta);
        }
    }

    #[test]
    fn contains_is_idempotent() {
        let hex = identity_placed();
        let inside = Point::new(0.3, -0.2);
        let outside = Point::new(2.0, 0.0);
        for _ in 0..100 {
            assert!(hex.contains(inside));
            assert!(!hex.contains(outside));
        }
    }

    #[test]
    fn boundary_is_tight_around_horizontal_edges() {
        // Identity placement has horizontal outline segments at y = ±√3/2.
        // Probe a hair to either side of both; the crossing rule must flip
        // exactly at the outline, with no dead band and no overlap.
        let hex = identity_placed();
        let bisector = 3.0_f64.sqrt() / 2.0;
        let delta = 1e-12;

        assert!(hex.contains(Point::new(0.0, -bisector + delta)));
        assert!(!hex.contains(Point::new(0.0, -bisector - delta)));
        assert!(hex.contains(Point::new(0.0, bisector - delta)));
        assert!(!hex.contains(Point::new(0.0, bisector + delta)));
    }

    #[test]
    fn adjacent_hexagons_never_both_claim_a_point() {
        // Two hexagons stacked so the upper outline of one is the lower
        // outline of the other. Near the shared edge, the half-open
        // crossing rule hands every probe to at most one of them.
        let bisector = 3.0_f64.sqrt() / 2.0;
        let mut ids = IdCounter::new();
        let lower = RegularHexagon::new(&mut ids).place(Point::new(0.0, 0.0), 0.0, 1.0, 1.0);
        let upper = RegularHexagon::new(&mut ids).place(Point::new(0.0, 2.0 * bisector), 0.0, 1.0, 1.0);

        for k in 1..=10 {
            for side in [-1.0, 1.0] {
                let p = Point::new(0.1, bisector + side * k as f64 * 1e-13);
                let claims = [lower.contains(p), upper.contains(p)];
                assert_eq!(
                    claims.iter().filter(|&&c| c).count(),
                    1,
                    "point {:?} claims: {:?}",
                    p,
                    claims
                );
            }
        }
    }

    #[test]
    fn zero_scale_degenerates_to_point() {
        let hex = canonical().place(Point::new(5.0, 5.0), 0.0, 0.0, 0.0);
        assert!(!hex.contains(Point::new(5.1, 5.0)));
        assert!(!hex.contains(Point::new(4.9, 5.0)));
    }

    #[test]
    fn scale_then_rotate_differs_from_rotate_then_scale() {
        // With non-uniform scale the build order is significant. place()
        // scales vertices first, then rotates: the unit vertex (1, 0)
        // scaled by (2, 1) stays at (2, 0), and a 90 degree rotation sends
        // it to (0, 2).
        let hex = canonical().place(Point::new(0.0, 0.0), FRAC_PI_2, 2.0, 1.0);
        let v0 = hex.vertices()[0];
        assert!((v0.x - 0.0).abs() < 1e-9 && (v0.y - 2.0).abs() < 1e-9, "v0 = {:?}", v0);
    }

    #[test]
    fn translation_lands_vertices_around_center() {
        let hex = canonical().place(Point::new(100.0, 200.0), 0.0, 3.0, 3.0);
        for v in hex.vertices() {
            assert!((v.distance(hex.center()) - 3.0).abs() < 1e-9);
        }
    }
}
