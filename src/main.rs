// main.rs - Conway's Game of Life on a bounded grid, with mouse authoring

use eframe::egui;
use tracing::info;

mod controller;
mod grid;
mod input;
mod ui;

use controller::Controller;
use input::Layout;
use ui::LifeApp;

// Construction-time configuration: grid shape and cell pixel size.
const ROWS: usize = 80;
const COLS: usize = 160;
const CELL_SIZE: f32 = 8.0;
const GAP: f32 = 1.0;

// Room for the panel margin and the status strip above the grid.
const MARGIN: f32 = 16.0;
const CHROME: f32 = 80.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let layout = Layout::new(ROWS, COLS, CELL_SIZE, GAP);
    let controller = Controller::new(layout)?;
    let (grid_w, grid_h) = layout.grid_size();
    info!(rows = ROWS, cols = COLS, "starting session");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([grid_w + MARGIN, grid_h + MARGIN + CHROME]),
        ..Default::default()
    };

    let app = LifeApp::new(controller);
    eframe::run_native(
        &format!("Conway's Game of Life ({ROWS}, {COLS})"),
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}
