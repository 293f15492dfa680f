//! The eframe application: input sampling, fixed-rate ticking, and layout.

use std::time::Instant;

use eframe::egui;

use crate::clock::TickClock;
use crate::config::SimConfig;
use crate::context::{SimulationContext, TickInput};
use crate::physics::{mass_center_y, ANCHOR_X, MASS_SIZE};
use crate::ui::{render_controls_panel, render_scene, DisplayMode};

/// Frames the hint circle takes to fade after a missed click.
const HINT_FRAMES: u32 = 120;

pub struct SpringLabApp {
    sim: SimulationContext,
    clock: TickClock,
    mode: DisplayMode,
    /// Remaining fade frames for the "click the weight" hint circle.
    hint_frames: u32,
    /// Scene rect from the previous frame, for pointer hit-testing.
    scene_rect: Option<egui::Rect>,
    /// Set by the Reset/New buttons, consumed on the next tick.
    pending_reset: bool,
    /// Set by the Start/Stop button, consumed on the next tick.
    pending_toggle: bool,
    current_file: Option<String>,
    status_message: Option<(String, Instant)>,
}

impl SpringLabApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            sim: SimulationContext::new(),
            clock: TickClock::new(),
            mode: DisplayMode::default(),
            hint_frames: 0,
            scene_rect: None,
            pending_reset: false,
            pending_toggle: false,
            current_file: None,
            status_message: None,
        }
    }

    fn show_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    fn save_config(&mut self) {
        if let Some(path) = self.current_file.clone() {
            match SimConfig::from(self.sim.params).save(&path) {
                Ok(()) => self.show_status(format!("Saved to {}", path)),
                Err(e) => self.show_status(format!("Save failed: {}", e)),
            }
        } else {
            self.save_config_as();
        }
    }

    fn save_config_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("oscillator.json")
            .save_file()
        {
            let path_str = path.display().to_string();
            match SimConfig::from(self.sim.params).save(&path) {
                Ok(()) => {
                    self.show_status(format!("Saved to {}", path_str));
                    self.current_file = Some(path_str);
                }
                Err(e) => self.show_status(format!("Save failed: {}", e)),
            }
        }
    }

    fn load_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            let path_str = path.display().to_string();
            match SimConfig::load(&path) {
                Ok(config) => {
                    self.sim.params = config.to_parameters();
                    self.current_file = Some(path_str.clone());
                    self.show_status(format!("Loaded {}", path_str));
                }
                Err(e) => self.show_status(format!("Load failed: {}", e)),
            }
        }
    }

    /// Sample this frame's input into one tick record. Also arms the hint
    /// circle when the user clicks the scene away from the mass.
    fn gather_input(&mut self, ctx: &egui::Context) -> TickInput {
        let (space, reset_key, pointer_pos, primary_pressed, primary_down) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::R),
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
            )
        });

        let mut input = TickInput {
            run_toggle: space || self.pending_toggle,
            reset: reset_key || self.pending_reset,
            dragging: primary_down,
            ..TickInput::default()
        };
        self.pending_toggle = false;
        self.pending_reset = false;

        if let (Some(rect), Some(pos)) = (self.scene_rect, pointer_pos) {
            let scene = pos - rect.min;
            input.pointer_y = scene.y as f64;

            if primary_pressed && !self.sim.is_running() && rect.contains(pos) {
                let center = egui::vec2(
                    ANCHOR_X as f32,
                    mass_center_y(self.sim.state().offset, self.sim.equilibrium()) as f32,
                );
                if (scene - center).length() < MASS_SIZE as f32 / 2.0 {
                    input.drag_started = true;
                } else {
                    self.hint_frames = HINT_FRAMES;
                }
            }
        }

        input
    }
}

impl eframe::App for SpringLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let input = self.gather_input(ctx);

        let mut ticks = self.clock.tick();
        if ticks == 0 && (input.run_toggle || input.reset || input.drag_started) {
            // Edge events must not slip between ticks.
            ticks = 1;
        }
        for i in 0..ticks {
            let tick_input = if i == 0 { input } else { input.edges_consumed() };
            self.sim.tick(&tick_input);
        }
        if input.reset {
            self.clock.reset();
            self.hint_frames = 0;
        }
        self.hint_frames = self.hint_frames.saturating_sub(1);

        // Menu bar
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New").clicked() {
                        self.pending_reset = true;
                        self.current_file = None;
                        ui.close_menu();
                    }
                    if ui.button("Open...").clicked() {
                        self.load_config();
                        ui.close_menu();
                    }
                    if ui.button("Save").clicked() {
                        self.save_config();
                        ui.close_menu();
                    }
                    if ui.button("Save As...").clicked() {
                        self.save_config_as();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("Reset")
                        .on_hover_text("Restore sliders and re-seat the mass at equilibrium")
                        .clicked()
                    {
                        self.pending_reset = true;
                    }

                    let btn_text = if self.sim.is_running() {
                        "⏸ Stop"
                    } else {
                        "▶ Start"
                    };
                    if ui.button(btn_text).clicked() {
                        self.pending_toggle = true;
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, time)) = &self.status_message {
                    if time.elapsed().as_secs() < 5 {
                        ui.label(msg);
                    } else {
                        self.status_message = None;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{:.0} FPS", 1.0 / ctx.input(|i| i.stable_dt)));
                    ui.separator();
                    if let Some(file) = &self.current_file {
                        ui.label(egui::RichText::new(file).small().weak());
                    } else {
                        ui.label(egui::RichText::new("(no preset)").small().weak());
                    }
                });
            });
        });

        // Controls
        egui::SidePanel::right("controls")
            .min_width(250.0)
            .default_width(300.0)
            .show(ctx, |ui| {
                render_controls_panel(ui, &mut self.sim.params, &mut self.mode);
            });

        // Scene
        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = render_scene(ui, &self.sim, self.mode, self.hint_frames);
            self.scene_rect = Some(rect);
        });

        // Keep animating even without input events.
        ctx.request_repaint();
    }
}
