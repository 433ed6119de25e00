use macroquad::prelude::Vec2;

use crate::boid::Boid;

/// A pluggable neighbor query that can be swapped without touching boid
/// update logic.
///
/// Every implementation must reproduce the reference semantics of the
/// brute-force scan: a neighbor is any *other* boid strictly closer than the
/// radius, self excluded by index (never by distance, so a coincident boid
/// still counts), results in flock order.
pub trait NeighborSearch: Send + Sync {
    /// Rebuild internal structures based on the current boid positions.
    /// Called once at the top of every step.
    fn rebuild(&mut self, boids: &[Boid]);

    /// Indices of the neighbors of `boids[index]`.
    fn neighbors(&self, boids: &[Boid], index: usize, radius: f32) -> Vec<usize>;

    /// One boid moved mid-pass (interleaved updates). Searches that query
    /// positions directly have nothing to maintain, hence the no-op default.
    fn relocate(&mut self, _index: usize, _old_pos: Vec2, _new_pos: Vec2) {}

    /// Human-readable name for display/debugging.
    fn name(&self) -> &'static str;
}

mod brute_force;
mod engine;
mod spatial_hash;

pub use brute_force::BruteForceNeighborSearch;
pub use engine::Sim;
pub use spatial_hash::SpatialHashNeighborSearch;
