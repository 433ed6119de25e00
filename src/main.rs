use std::collections::VecDeque;
use std::env;
use std::time::Instant;

use macroquad::prelude::*;
use ::rand::{rngs::StdRng, SeedableRng};

use flocking::clock::StepClock;
use flocking::flock::{Flock, WorldBounds};
use flocking::params::SimParams;
use flocking::sim::{BruteForceNeighborSearch, Sim, SpatialHashNeighborSearch};
use flocking::ui::{self, PanelActions, SearchKind};

const MSAA_SAMPLE_COUNT: i32 = 4;
const SIM_STEPS_PER_SECOND: f32 = 60.0;

// rgb(20, 20, 20), the canvas color the trail fades toward.
const BACKGROUND: Color = Color::new(0.078, 0.078, 0.078, 1.0);
const TRAIL_FADE: Color = Color::new(0.078, 0.078, 0.078, 0.1);
// #aaa for the perception ring.
const OVERLAY: Color = Color::new(0.667, 0.667, 0.667, 1.0);

fn rng_seed() -> u64 {
    env::var("FLOCKING_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1)
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Flocking".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        sample_count: MSAA_SAMPLE_COUNT,
        high_dpi: true,
        ..Default::default()
    }
}

/// Perception ring around boid 0, the live readout of the radius slider.
fn draw_perception_ring(sim: &Sim, params: &SimParams) {
    if let Some(first) = sim.boids().first() {
        draw_circle_lines(
            first.pos.x,
            first.pos.y,
            params.perception_radius,
            2.0,
            OVERLAY,
        );
    }
}

fn draw_perf_overlay(sim: &Sim, step_times_ms: &VecDeque<f32>) {
    let avg_ms: f32 = if step_times_ms.is_empty() {
        0.0
    } else {
        step_times_ms.iter().copied().sum::<f32>() / step_times_ms.len() as f32
    };
    draw_text(
        &format!(
            "Sim ({}) boids: {} step(100): {:.2}ms fps: {}",
            sim.algo_name(),
            sim.boids().len(),
            avg_ms,
            get_fps()
        ),
        20.0,
        40.0,
        32.0,
        WHITE,
    );
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = rng_seed();
    log::info!("using rng seed {seed}");

    let mut params = SimParams::default();
    let mut search_kind = SearchKind::BruteForce;

    // World matches the window size
    let bounds = WorldBounds {
        w: screen_width(),
        h: screen_height(),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let flock = Flock::random(params.population, bounds, &mut rng);
    let mut sim = Sim::new(flock, Box::new(BruteForceNeighborSearch), rng);

    let mut clock = StepClock::new(SIM_STEPS_PER_SECOND);
    let mut step_times_ms: VecDeque<f32> = VecDeque::with_capacity(100);

    loop {
        // The wrap domain follows the window; boids stay where they are.
        let (w, h) = (screen_width(), screen_height());
        let bounds = sim.bounds();
        if w != bounds.w || h != bounds.h {
            log::debug!("domain resized to {w}x{h}");
            sim.set_bounds(w, h);
        }

        let mut actions = PanelActions::default();
        egui_macroquad::ui(|ctx| {
            actions = ui::draw_panel(ctx, &mut params, &mut search_kind);
        });

        if actions.search_changed {
            match search_kind {
                SearchKind::BruteForce => sim.set_search(Box::new(BruteForceNeighborSearch)),
                SearchKind::SpatialHash => sim.set_search(Box::new(
                    SpatialHashNeighborSearch::new(params.perception_radius),
                )),
            }
            log::debug!("neighbor search -> {}", sim.algo_name());
        }
        if actions.reseed {
            sim.reseed(params.population);
            log::debug!("reseeded flock, population {}", params.population);
        }

        let steps = if params.paused {
            clock.reset();
            0
        } else {
            clock.advance(get_frame_time())
        };
        if steps > 0 {
            let start = Instant::now();
            for _ in 0..steps {
                sim.step(&params, params.time_step);
            }
            let ms_per_step = start.elapsed().as_secs_f32() * 1000.0 / steps as f32;
            step_times_ms.push_back(ms_per_step);
            if step_times_ms.len() > 100 {
                step_times_ms.pop_front();
            }
        }

        // Trail mechanic: no hard clear while trails are on, just a
        // translucent wash that dims history a notch each frame.
        if !params.show_trail {
            clear_background(BACKGROUND);
        }
        draw_rectangle(0.0, 0.0, w, h, TRAIL_FADE);

        let color = Color::new(params.color[0], params.color[1], params.color[2], 1.0);
        for boid in sim.boids() {
            draw_circle(boid.pos.x, boid.pos.y, params.boid_radius, color);
        }

        draw_perception_ring(&sim, &params);
        draw_perf_overlay(&sim, &step_times_ms);
        egui_macroquad::draw();

        next_frame().await;
    }
}
