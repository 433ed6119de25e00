use std::ops::RangeInclusive;

/// How `Sim::step` orders steering and movement across the flock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMode {
    /// Steer and move one boid at a time, in flock order. Boids later in the
    /// pass see the already-moved state of earlier ones, so a pass is
    /// order-dependent. This matches the classic per-agent animation loop
    /// and is the default.
    Interleaved,
    /// Compute every force against the same pre-step snapshot, then move
    /// everyone. Order-independent; the force pass runs on rayon.
    TwoPhase,
}

/// Everything the control panel can touch, handed to the simulation by
/// reference each step. The panel's slider ranges are the only validation;
/// the simulation runs with whatever values it is given.
#[derive(Clone, Debug)]
pub struct SimParams {
    /// Weight on the match-neighbor-velocity rule.
    pub alignment: f32,
    /// Weight on the steer-to-centroid rule.
    pub cohesion: f32,
    /// Weight on the inverse-square keep-away rule.
    pub avoidance: f32,
    /// Speed every steering target is scaled to, and the hard cap applied to
    /// velocity after integration.
    pub max_speed: f32,
    /// Per-rule cap on steering force magnitude, applied before the rule
    /// weight.
    pub max_force: f32,
    /// Boids strictly closer than this are neighbors.
    pub perception_radius: f32,
    /// Flock size. Changing it in the panel re-creates the flock.
    pub population: usize,
    /// Fade previous frames instead of clearing them.
    pub show_trail: bool,
    /// Boid fill color.
    pub color: [f32; 3],
    /// Drawn radius of a boid in pixels.
    pub boid_radius: f32,
    /// Timestep handed to `Sim::step`. 1.0 reproduces the classic
    /// one-unit-per-frame motion at the fixed step rate.
    pub time_step: f32,
    pub update_mode: UpdateMode,
    pub paused: bool,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            alignment: 0.5,
            cohesion: 0.5,
            avoidance: 0.5,
            max_speed: 3.0,
            max_force: 0.5,
            perception_radius: 100.0,
            population: 400,
            show_trail: true,
            color: [1.0, 1.0, 1.0],
            boid_radius: 2.5,
            time_step: 1.0,
            update_mode: UpdateMode::Interleaved,
            paused: false,
        }
    }
}

// Slider ranges for the control panel.
pub const WEIGHT_RANGE: RangeInclusive<f32> = 0.0..=1.0;
pub const MAX_SPEED_RANGE: RangeInclusive<f32> = 2.0..=6.0;
pub const MAX_FORCE_RANGE: RangeInclusive<f32> = 0.05..=1.0;
pub const PERCEPTION_RANGE: RangeInclusive<f32> = 1.0..=300.0;
pub const POPULATION_RANGE: RangeInclusive<usize> = 1..=2000;
pub const BOID_RADIUS_RANGE: RangeInclusive<f32> = 1.0..=10.0;
pub const TIME_STEP_RANGE: RangeInclusive<f32> = 0.1..=2.0;
