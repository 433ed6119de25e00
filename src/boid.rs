use macroquad::prelude::Vec2;

use crate::flock::WorldBounds;
use crate::math::Vec2Ext;
use crate::params::SimParams;

#[derive(Clone, Debug)]
pub struct Boid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Indices into the owning flock, refreshed by the engine every step.
    /// Plain indices, never references: the flock is dropped wholesale on
    /// reinitialization and stale entries must not dangle.
    pub neighbors: Vec<usize>,
}

impl Boid {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            acc: Vec2::ZERO,
            neighbors: Vec::new(),
        }
    }

    /// Shared tail of the three rules: take a desired direction, scale it to
    /// `max_speed`, subtract the current velocity, cap the correction at
    /// `max_force`.
    fn steer_toward(&self, desired: Vec2, params: &SimParams) -> Vec2 {
        (desired.set_magnitude(params.max_speed) - self.vel).limit(params.max_force)
    }

    /// Steer toward the average velocity of the cached neighbors.
    pub fn alignment(&self, flock: &[Boid], params: &SimParams) -> Vec2 {
        if self.neighbors.is_empty() {
            return Vec2::ZERO;
        }
        let mut desired = Vec2::ZERO;
        for &j in &self.neighbors {
            desired += flock[j].vel;
        }
        desired /= self.neighbors.len() as f32;
        self.steer_toward(desired, params)
    }

    /// Steer toward the centroid of the cached neighbors.
    pub fn cohesion(&self, flock: &[Boid], params: &SimParams) -> Vec2 {
        if self.neighbors.is_empty() {
            return Vec2::ZERO;
        }
        let mut centroid = Vec2::ZERO;
        for &j in &self.neighbors {
            centroid += flock[j].pos;
        }
        centroid /= self.neighbors.len() as f32;
        self.steer_toward(centroid - self.pos, params)
    }

    /// Steer away from the cached neighbors, each weighted by the inverse
    /// square of its distance. A coincident neighbor divides by zero and the
    /// resulting NaN rides through uncaught; see `math::Vec2Ext`.
    pub fn avoidance(&self, flock: &[Boid], params: &SimParams) -> Vec2 {
        if self.neighbors.is_empty() {
            return Vec2::ZERO;
        }
        let mut desired = Vec2::ZERO;
        for &j in &self.neighbors {
            let away = self.pos - flock[j].pos;
            desired += away / away.length_squared();
        }
        desired /= self.neighbors.len() as f32;
        self.steer_toward(desired, params)
    }

    /// One movement step: accumulate acceleration into velocity, cap the
    /// speed, advance the position, reset the accumulator, wrap.
    pub fn integrate(&mut self, params: &SimParams, bounds: WorldBounds, dt: f32) {
        self.vel += self.acc * dt;
        self.vel = self.vel.limit(params.max_speed);
        self.pos += self.vel * dt;
        self.acc = Vec2::ZERO;

        // Single-step wrap, not modulo. One step's travel is bounded by
        // max_speed, which is assumed small next to the domain, so crossing
        // an edge lands at the opposite edge exactly. A position sitting
        // exactly on an edge stays put.
        if self.pos.x < 0.0 {
            self.pos.x = bounds.w;
        } else if self.pos.x > bounds.w {
            self.pos.x = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = bounds.h;
        } else if self.pos.y > bounds.h {
            self.pos.y = 0.0;
        }
    }
}
