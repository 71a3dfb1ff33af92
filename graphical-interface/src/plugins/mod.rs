mod airports;
mod routes;
pub use airports::Airports;
pub use routes::Routes;

use egui::Color32;

pub(crate) const MARKER_COLOR: Color32 = Color32::from_rgb(248, 250, 252);
pub(crate) const SELECTED_COLOR: Color32 = Color32::from_rgb(96, 165, 250);
pub(crate) const LABEL_COLOR: Color32 = Color32::from_rgb(226, 232, 240);
pub(crate) const ROUTE_COLOR: Color32 = Color32::from_rgb(56, 189, 248);
