//! Real-time boids flocking.
//!
//! A flock of agents steered by the three Reynolds rules (alignment,
//! cohesion, avoidance), every parameter live-tunable while the simulation
//! runs. The engine in [`sim`] is rendering-agnostic; the binary drives it
//! with macroquad and an egui control panel.

pub mod boid;
pub mod clock;
pub mod flock;
pub mod math;
pub mod params;
pub mod sim;
pub mod ui;
