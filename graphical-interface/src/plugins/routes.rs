use std::{cell::RefCell, rc::Rc};

use egui::{Rect, Response, Sense, Stroke, Vec2};
use walkers::{Plugin, Projector};

use super::ROUTE_COLOR;
use crate::state::MapIntent;
use crate::types::Airport;

/// Draws a line from the selected airport to each nonstop destination, plus a
/// larger invisible hit-target over each destination for navigation clicks.
///
/// Must be registered after the airport markers: its hit-targets then sit on
/// top, so opening a destination never also toggles the selection underneath.
pub struct Routes<'a> {
    origin: &'a Airport,
    connections: &'a [Airport],
    intents: Rc<RefCell<Vec<MapIntent>>>,
}

impl<'a> Routes<'a> {
    pub fn new(
        origin: &'a Airport,
        connections: &'a [Airport],
        intents: Rc<RefCell<Vec<MapIntent>>>,
    ) -> Self {
        Self {
            origin,
            connections,
            intents,
        }
    }
}

impl Plugin for Routes<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let origin = projector.project(self.origin.position).to_pos2();

        for destination in self.connections {
            if destination.iata == self.origin.iata {
                continue;
            }
            let target = projector.project(destination.position).to_pos2();
            ui.painter().line_segment(
                [origin, target],
                Stroke::new(2.0, ROUTE_COLOR.gamma_multiply(0.45)),
            );
        }

        for destination in self.connections {
            if destination.iata == self.origin.iata {
                continue;
            }
            let target = projector.project(destination.position).to_pos2();
            let hotspot = Rect::from_center_size(target, Vec2::splat(26.0));
            let response = ui.allocate_rect(hotspot, Sense::click());

            if response.hovered() {
                ui.painter()
                    .circle_stroke(target, 10.0, Stroke::new(1.5, ROUTE_COLOR));
            }
            if response.clicked() {
                self.intents
                    .borrow_mut()
                    .push(MapIntent::OpenDestination(destination.iata.clone()));
            }
        }
    }
}
