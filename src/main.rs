mod app;
mod color;
mod data;
mod projection;
mod scene;
mod state;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use app::OrbitVisApp;
use eframe::egui;
use state::ViewerState;

/// Input written by the orbit trace generator.
const DATA_PATH: &str = "binaries/bin/data.txt";

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let path = PathBuf::from(DATA_PATH);
    let dataset = data::reader::load_file(&path)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 750.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let state = ViewerState::new(path, dataset);

    // Blocks until the window is closed.
    eframe::run_native(
        "Orbit Vis",
        options,
        Box::new(|_cc| Ok(Box::new(OrbitVisApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer window: {e}"))
}
