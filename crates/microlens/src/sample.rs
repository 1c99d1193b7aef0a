//! Monte Carlo accumulation: classify sample points against placed
//! hexagons and report the filling factor.
//!
//! Classification is decoupled from where samples come from. The seeded
//! [`SampleStream`] gives true Monte Carlo mode; any external producer (a
//! pointer-driven exploration tool, a replayed log) can feed the same
//! [`Session::classify`] contract and the statistics behave identically.

use crate::geometry::{Point, Rect};
use crate::hexagon::PlacedHexagon;
use crate::rng::Rng;

/// Result of classifying one sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The point landed inside the hexagon with this identifier.
    Hit { hexagon: usize },
    Miss,
}

/// Hit/miss counters for one batch of samples.
///
/// Merging is plain addition, which is commutative and associative, so
/// partial tallies from independently run batches can be combined in any
/// order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub hits: u64,
    pub misses: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    /// The running filling factor, or `None` before any sample has been
    /// classified. The empty state is explicit, never a division error.
    #[inline]
    pub fn filling_factor(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            None
        } else {
            Some(self.hits as f64 / total as f64)
        }
    }

    /// Fold another tally into this one.
    #[inline]
    pub fn merge(&mut self, other: Tally) {
        self.hits += other.hits;
        self.misses += other.misses;
    }
}

/// A sampling session: an immutable hexagon list plus its running tally.
#[derive(Debug, Clone)]
pub struct Session {
    hexagons: Vec<PlacedHexagon>,
    tally: Tally,
}

impl Session {
    /// Start a fresh session with zeroed counters.
    pub fn new(hexagons: Vec<PlacedHexagon>) -> Self {
        Self { hexagons, tally: Tally::new() }
    }

    #[inline]
    pub fn hexagons(&self) -> &[PlacedHexagon] {
        &self.hexagons
    }

    #[inline]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Classify one sample point.
    ///
    /// Hexagons are tested in list order and the first containment wins,
    /// so a point is never double-counted even if the bound hexagons were
    /// to overlap. Exactly one counter is incremented per call; prior
    /// counts are never revisited.
    pub fn classify(&mut self, point: Point) -> Outcome {
        for hexagon in &self.hexagons {
            if hexagon.contains(point) {
                self.tally.hits += 1;
                return Outcome::Hit { hexagon: hexagon.id() };
            }
        }
        self.tally.misses += 1;
        Outcome::Miss
    }

    /// The running filling factor, or `None` before any sample.
    #[inline]
    pub fn filling_factor(&self) -> Option<f64> {
        self.tally.filling_factor()
    }
}

/// An endless stream of uniformly distributed points in a rectangle.
///
/// Deterministic for a given seed; restart by building a new stream from a
/// fresh generator. Two independently advanced streams share nothing.
#[derive(Debug, Clone)]
pub struct SampleStream {
    region: Rect,
    rng: Rng,
}

impl SampleStream {
    pub fn new(region: Rect, rng: Rng) -> Self {
        Self { region, rng }
    }
}

impl Iterator for SampleStream {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        Some(Point::new(
            self.rng.next_range(self.region.x, self.region.x + self.region.width),
            self.rng.next_range(self.region.y, self.region.y + self.region.height),
        ))
    }
}
