use macroquad::prelude::vec2;
use rand::Rng;

use crate::boid::Boid;

/// Wrap-around world extents. Follows the window, so it can change while the
/// flock is alive; boids are never repositioned on a change, they just wrap
/// against the new edges the next time they cross one.
#[derive(Clone, Copy, Debug)]
pub struct WorldBounds {
    pub w: f32,
    pub h: f32,
}

pub struct Flock {
    pub boids: Vec<Boid>,
    pub bounds: WorldBounds,
}

impl Flock {
    /// A fresh flock: positions uniform over the bounds, velocities uniform
    /// in [-0.5, 0.5) per axis.
    pub fn random(num: usize, bounds: WorldBounds, rng: &mut impl Rng) -> Self {
        let mut boids = Vec::with_capacity(num);

        for _ in 0..num {
            let pos = vec2(
                rng.random::<f32>() * bounds.w,
                rng.random::<f32>() * bounds.h,
            );
            let vel = vec2(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5);
            boids.push(Boid::new(pos, vel));
        }

        Self { boids, bounds }
    }
}
