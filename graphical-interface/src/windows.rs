use egui::{Align2, RichText, Ui, Window};
use walkers::MapMemory;

use crate::map::MapRenderer;

/// Zoom controls for the tile map.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("Zoom")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10.0, -10.0])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }
                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

/// Switches between the tile map and the flat projection.
pub fn renderer_toggle(ui: &Ui, renderer: &mut MapRenderer) {
    Window::new("View")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_BOTTOM, [-10.0, -10.0])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(renderer, MapRenderer::Tiles, "Tiles");
                ui.selectable_value(renderer, MapRenderer::Flat, "Flat");
            });
        });
}
