use egui_macroquad::egui;

use crate::params::{
    SimParams, UpdateMode, BOID_RADIUS_RANGE, MAX_FORCE_RANGE, MAX_SPEED_RANGE,
    PERCEPTION_RANGE, POPULATION_RANGE, TIME_STEP_RANGE, WEIGHT_RANGE,
};

/// Which neighbor search backend the panel has selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    BruteForce,
    SpatialHash,
}

/// What the frame loop has to do after the panel was edited. Everything else
/// the panel touches takes effect through `SimParams` alone.
#[derive(Default)]
pub struct PanelActions {
    pub reseed: bool,
    pub search_changed: bool,
}

/// The tuning window, pinned top-right. Sliders clamp to their ranges; that
/// is the only validation the parameters ever get.
pub fn draw_panel(
    ctx: &egui::Context,
    params: &mut SimParams,
    search: &mut SearchKind,
) -> PanelActions {
    let mut actions = PanelActions::default();

    egui::Window::new("Controls")
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .show(ctx, |ui| {
            egui::CollapsingHeader::new("Parameters")
                .default_open(true)
                .show(ui, |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.max_speed, MAX_SPEED_RANGE)
                            .text("Max Speed"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.max_force, MAX_FORCE_RANGE)
                            .text("Max Force"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.perception_radius, PERCEPTION_RANGE)
                            .text("Perception Radius"),
                    );
                    // Re-creates live while the slider drags.
                    if ui
                        .add(
                            egui::Slider::new(&mut params.population, POPULATION_RANGE)
                                .text("Flock Number"),
                        )
                        .changed()
                    {
                        actions.reseed = true;
                    }
                });

            egui::CollapsingHeader::new("Reynolds Rules")
                .default_open(true)
                .show(ui, |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.alignment, WEIGHT_RANGE).text("Alignment"),
                    );
                    ui.add(egui::Slider::new(&mut params.cohesion, WEIGHT_RANGE).text("Cohesion"));
                    ui.add(
                        egui::Slider::new(&mut params.avoidance, WEIGHT_RANGE).text("Avoidance"),
                    );
                });

            egui::CollapsingHeader::new("Aesthetic")
                .default_open(true)
                .show(ui, |ui| {
                    ui.checkbox(&mut params.show_trail, "Show Trail");
                    ui.horizontal(|ui| {
                        ui.color_edit_button_rgb(&mut params.color);
                        ui.label("Color");
                    });
                    ui.add(
                        egui::Slider::new(&mut params.boid_radius, BOID_RADIUS_RANGE)
                            .text("Boid Size"),
                    );
                });

            egui::CollapsingHeader::new("Simulation")
                .default_open(false)
                .show(ui, |ui| {
                    ui.checkbox(&mut params.paused, "Pause");
                    ui.add(
                        egui::Slider::new(&mut params.time_step, TIME_STEP_RANGE)
                            .text("Time Step"),
                    );

                    ui.label("Update order");
                    ui.radio_value(&mut params.update_mode, UpdateMode::Interleaved, "per-agent");
                    ui.radio_value(
                        &mut params.update_mode,
                        UpdateMode::TwoPhase,
                        "two-phase snapshot",
                    );

                    ui.label("Neighbor search");
                    let search_before = *search;
                    ui.radio_value(search, SearchKind::BruteForce, "brute force");
                    ui.radio_value(search, SearchKind::SpatialHash, "spatial hash");
                    if *search != search_before {
                        actions.search_changed = true;
                    }

                    ui.separator();
                    if ui.button("Reseed flock").clicked() {
                        actions.reseed = true;
                    }
                });
        });

    actions
}
