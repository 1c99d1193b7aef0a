//! # microlens
//!
//! Hexagon geometry and Monte Carlo filling-factor estimation for honeycomb
//! microlens arrays.
//!
//! The library answers one question: given a hexagon side length and a
//! padding between adjacent hexagons (both in arcseconds), what fraction of
//! uniformly sampled points lands inside the lenses? That fraction is the
//! *filling factor*, and instrument designers tune the padding until a
//! target factor is reached.
//!
//! The pieces compose bottom-up:
//! - [`hexagon`] defines the canonical unit hexagon, affine placement and
//!   point containment,
//! - [`honeycomb`] derives the 7-hexagon reference cluster from a side
//!   length and padding,
//! - [`sample`] classifies point streams against the placed hexagons and
//!   accumulates the hit/miss statistic.
//!
//! All of it is pure computation over immutable data; sample points may come
//! from the seeded [`sample::SampleStream`] or from any external producer
//! feeding the same classification contract.

pub mod geometry;
pub mod hexagon;
pub mod honeycomb;
pub mod profile;
pub mod rng;
pub mod sample;

// Re-export common types at crate root for convenience.
pub use geometry::{Point, Rect};
pub use hexagon::{IdCounter, PlacedHexagon, RegularHexagon, PALETTE};
pub use honeycomb::{compute_cluster, HoneycombCluster, LayoutError, CENTER_INDEX};
pub use profile::MicrolensProfile;
pub use rng::Rng;
pub use sample::{Outcome, SampleStream, Session, Tally};
