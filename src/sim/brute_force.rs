use super::NeighborSearch;
use crate::boid::Boid;

/// Straight O(n) scan per query. This is the reference the other searches
/// are tested against.
pub struct BruteForceNeighborSearch;

impl NeighborSearch for BruteForceNeighborSearch {
    fn rebuild(&mut self, _boids: &[Boid]) {
        // Nothing to rebuild for brute force.
    }

    fn neighbors(&self, boids: &[Boid], index: usize, radius: f32) -> Vec<usize> {
        let r2 = radius * radius;
        let pos = boids[index].pos;

        let mut found = Vec::new();
        for (j, other) in boids.iter().enumerate() {
            if j == index {
                continue;
            }
            // Strict inequality. No lower cutoff: a coincident boid counts.
            if (other.pos - pos).length_squared() < r2 {
                found.push(j);
            }
        }
        found
    }

    fn name(&self) -> &'static str {
        "BruteForce"
    }
}
