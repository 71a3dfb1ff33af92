use api::Api;

pub mod api;
pub mod destination;
pub mod fetcher;
mod flat_map;
mod map;
mod plugins;
pub mod projection;
pub mod state;
pub mod types;
mod widgets;
mod windows;

use map::MyApp;

pub fn run() -> Result<(), eframe::Error> {
    eframe::run_native(
        "SkyLines",
        Default::default(),
        Box::new(|cc| Ok(Box::new(MyApp::new(cc.egui_ctx.clone(), Api::new())))),
    )
}
