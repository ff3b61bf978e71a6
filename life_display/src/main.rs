// main.rs - egui front end for the life_grid engine

use eframe::egui;

mod app;

use app::LifeApp;

// Session configuration: one fixed value each, chosen at compile time.
/// Cells per side of the board.
const GRID_SIZE: usize = 100;
/// Stepping cadence, generations per second.
const GENS_PER_SECOND: u32 = 12;

fn main() -> Result<(), eframe::Error> {
    // Log filtering comes from RUST_LOG.
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 940.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Toroidal Game of Life",
        options,
        Box::new(|_cc| {
            Box::new(LifeApp::new(GRID_SIZE, GENS_PER_SECOND).expect("valid board size"))
        }),
    )
}
