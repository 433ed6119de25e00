use macroquad::prelude::Vec2;
use rand::rngs::StdRng;
use rayon::prelude::*;

use super::{BruteForceNeighborSearch, NeighborSearch};
use crate::boid::Boid;
use crate::flock::{Flock, WorldBounds};
use crate::params::{SimParams, UpdateMode};

pub struct Sim {
    flock: Flock,
    search: Box<dyn NeighborSearch>,
    rng: StdRng,
}

impl Sim {
    pub fn new(flock: Flock, search: Box<dyn NeighborSearch>, rng: StdRng) -> Self {
        Self { flock, search, rng }
    }

    /// Convenience constructor for the default brute-force neighbor search.
    pub fn with_brute_force(flock: Flock, rng: StdRng) -> Self {
        Self::new(flock, Box::new(BruteForceNeighborSearch), rng)
    }

    pub fn algo_name(&self) -> &'static str {
        self.search.name()
    }

    pub fn boids(&self) -> &[Boid] {
        &self.flock.boids
    }

    pub fn bounds(&self) -> WorldBounds {
        self.flock.bounds
    }

    /// Swap the neighbor search implementation between steps.
    pub fn set_search(&mut self, search: Box<dyn NeighborSearch>) {
        self.search = search;
    }

    /// Resize the wrap-around domain. Boids are left where they are; anyone
    /// now outside simply wraps on their next edge crossing.
    pub fn set_bounds(&mut self, w: f32, h: f32) {
        self.flock.bounds = WorldBounds { w, h };
    }

    /// Throw away the current flock and draw a fresh one from the engine's
    /// rng stream. Not for use mid-step: every cached neighbor index dies
    /// with the old flock.
    pub fn reseed(&mut self, count: usize) {
        let bounds = self.flock.bounds;
        self.flock = Flock::random(count, bounds, &mut self.rng);
    }

    /// Advance the whole flock by one step of `dt` time units.
    pub fn step(&mut self, params: &SimParams, dt: f32) {
        if self.flock.boids.is_empty() {
            return;
        }
        self.search.rebuild(&self.flock.boids);
        match params.update_mode {
            UpdateMode::Interleaved => self.step_interleaved(params, dt),
            UpdateMode::TwoPhase => self.step_two_phase(params, dt),
        }
    }

    /// Classic per-agent loop: each boid steers against the flock as it is
    /// *right now* and moves immediately, so boid k sees boids 0..k already
    /// advanced. The relocate hook keeps grid-backed searches exact under
    /// that churn.
    fn step_interleaved(&mut self, params: &SimParams, dt: f32) {
        let bounds = self.flock.bounds;

        for i in 0..self.flock.boids.len() {
            let cache = self
                .search
                .neighbors(&self.flock.boids, i, params.perception_radius);
            self.flock.boids[i].neighbors = cache;

            let (ali, coh, avo) = {
                let boid = &self.flock.boids[i];
                (
                    boid.alignment(&self.flock.boids, params),
                    boid.cohesion(&self.flock.boids, params),
                    boid.avoidance(&self.flock.boids, params),
                )
            };

            let boid = &mut self.flock.boids[i];
            boid.acc += ali * params.alignment + coh * params.cohesion + avo * params.avoidance;
            let before = boid.pos;
            boid.integrate(params, bounds, dt);
            let after = boid.pos;
            self.search.relocate(i, before, after);
        }
    }

    /// Order-independent variant: every force is computed against the same
    /// pre-step snapshot, then everyone moves. The force pass is embarrassingly
    /// parallel, so it goes through rayon.
    fn step_two_phase(&mut self, params: &SimParams, dt: f32) {
        let n = self.flock.boids.len();

        let caches: Vec<Vec<usize>> = {
            let boids = &self.flock.boids;
            let search = &self.search;
            (0..n)
                .into_par_iter()
                .map(|i| search.neighbors(boids, i, params.perception_radius))
                .collect()
        };
        for (boid, cache) in self.flock.boids.iter_mut().zip(caches) {
            boid.neighbors = cache;
        }

        let accels: Vec<Vec2> = {
            let boids = &self.flock.boids;
            (0..n)
                .into_par_iter()
                .map(|i| {
                    let boid = &boids[i];
                    boid.alignment(boids, params) * params.alignment
                        + boid.cohesion(boids, params) * params.cohesion
                        + boid.avoidance(boids, params) * params.avoidance
                })
                .collect()
        };

        let bounds = self.flock.bounds;
        for (boid, accel) in self.flock.boids.iter_mut().zip(accels) {
            boid.acc += accel;
            boid.integrate(params, bounds, dt);
        }
    }
}
