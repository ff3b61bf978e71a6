// app.rs - Board painting, click seeding, and lifecycle controls

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Sense, Stroke, Vec2};
use log::{debug, warn};
use rand::Rng;

use life_grid::{CellState, Coord, GridError, Renderer, Simulation};

/// The display's own copy of the visible board.
///
/// Updated only through [`Renderer`] events, so a tick never forces a full
/// re-read of the engine: the core addresses the flipped cells, this buffer
/// mirrors them, and painting reads the mirror.
struct CellBuffer {
    size: usize,
    cells: Vec<CellState>,
}

impl CellBuffer {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Dead; size * size],
        }
    }

    fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[row * self.size + col]
    }

    fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row * self.size + col] = state;
    }
}

impl Renderer for CellBuffer {
    fn cell_changed(&mut self, coord: Coord, state: CellState) {
        self.set(coord.row, coord.col, state);
    }

    fn cleared(&mut self) {
        self.cells.fill(CellState::Dead);
    }
}

pub struct LifeApp {
    session: Simulation,
    view: CellBuffer,
    live_color: Color32,
    dead_color: Color32,
}

impl LifeApp {
    pub fn new(size: usize, gens_per_second: u32) -> Result<Self, GridError> {
        Ok(Self {
            session: Simulation::with_cadence(size, gens_per_second)?,
            view: CellBuffer::new(size),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
        })
    }

    /// Click handler: flip the cell in the engine and mirror the outcome.
    /// Seeding is allowed at any time; during a run it lands between ticks.
    fn toggle_cell(&mut self, row: usize, col: usize) {
        match self.session.toggle(row, col) {
            Ok(state) => {
                self.view.set(row, col, state);
                debug!("seeded cell {}: {:?}", Coord::new(row, col), state);
            }
            Err(err) => warn!("seed rejected: {}", err),
        }
    }

    /// Clear the session and fill roughly a third of the board at random.
    fn randomize(&mut self) {
        self.session.reset(&mut self.view);
        let mut rng = rand::rng();
        let size = self.view.size;
        for row in 0..size {
            for col in 0..size {
                if rng.random_bool(1.0 / 3.0) && self.session.set_alive(row, col).is_ok() {
                    self.view.set(row, col, CellState::Alive);
                }
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance the loop when its deadline has passed.
        self.session.poll(Instant::now(), &mut self.view);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Toroidal Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.session.is_running() {
                    "⏸ Pause"
                } else {
                    "▶ Start"
                };
                if ui.button(button_text).clicked() {
                    if self.session.is_running() {
                        self.session.stop();
                    } else {
                        self.session.start();
                    }
                }

                if ui.button("⏹ Reset").clicked() {
                    self.session.reset(&mut self.view);
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.session.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead. The board wraps at the edges.");

            ui.separator();

            // Draw the board
            let box_size = 7.0;
            let spacing = 0.5;
            let size = self.view.size;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((box_size + spacing) * size as f32 - spacing);

            let (response, painter) = ui.allocate_painter(total_size, Sense::click());

            // Fill background
            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            let clicked_at = if response.clicked() {
                response.interact_pointer_pos()
            } else {
                None
            };

            for row in 0..size {
                for col in 0..size {
                    let x = start_pos.x + col as f32 * (box_size + spacing);
                    let y = start_pos.y + row as f32 * (box_size + spacing);

                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let cell_color = if self.view.get(row, col).is_alive() {
                        self.live_color
                    } else {
                        self.dead_color
                    };

                    painter.rect_filled(rect, 1.0, cell_color);

                    // Subtle border
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                    if let Some(pos) = clicked_at {
                        if rect.contains(pos) {
                            self.toggle_cell(row, col);
                        }
                    }
                }
            }

            ui.separator();

            // Statistics
            let live = self.session.grid().live_count();
            let total = size * size;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live as f32 / total as f32) * 100.0
                ));
            });
        });

        // Keep frames coming while the loop is armed so the pump fires on
        // schedule.
        if self.session.is_running() {
            ctx.request_repaint();
        }
    }
}
