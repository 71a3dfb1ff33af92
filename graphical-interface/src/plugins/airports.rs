use std::{cell::RefCell, rc::Rc};

use egui::{Align2, FontId, Rect, Response, Sense, Stroke, Vec2};
use walkers::{Plugin, Projector};

use super::{LABEL_COLOR, MARKER_COLOR, SELECTED_COLOR};
use crate::state::MapIntent;
use crate::types::Airport;

/// Draws one marker per visible airport on the tile map. Clicking a marker
/// selects its airport; clicking the already selected one deselects it.
pub struct Airports<'a> {
    airports: &'a [Airport],
    selected: Option<String>,
    intents: Rc<RefCell<Vec<MapIntent>>>,
}

impl<'a> Airports<'a> {
    pub fn new(
        airports: &'a [Airport],
        selected: Option<String>,
        intents: Rc<RefCell<Vec<MapIntent>>>,
    ) -> Self {
        Self {
            airports,
            selected,
            intents,
        }
    }
}

impl Plugin for Airports<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for airport in self.airports {
            let selected = self.selected.as_deref() == Some(airport.iata.as_str());
            airport.draw(ui, projector, selected, &mut self.intents.borrow_mut());
        }
    }
}

impl Airport {
    fn draw(
        &self,
        ui: &mut egui::Ui,
        projector: &Projector,
        selected: bool,
        intents: &mut Vec<MapIntent>,
    ) {
        let screen_position = projector.project(self.position).to_pos2();

        let clickable_area = Rect::from_center_size(screen_position, Vec2::splat(18.0));
        let response = ui.allocate_rect(clickable_area, Sense::click());

        let painter = ui.painter();
        if response.hovered() {
            painter.circle_stroke(screen_position, 9.0, Stroke::new(1.0, SELECTED_COLOR));
        }
        let (radius, color) = if selected {
            (6.0, SELECTED_COLOR)
        } else {
            (4.0, MARKER_COLOR)
        };
        painter.circle_filled(screen_position, radius, color);
        painter.text(
            screen_position + Vec2::new(8.0, -8.0),
            Align2::LEFT_BOTTOM,
            &self.iata,
            FontId::proportional(12.0),
            LABEL_COLOR,
        );

        if response.clicked() {
            let intent = if selected {
                MapIntent::Deselect
            } else {
                MapIntent::Select(self.iata.clone())
            };
            intents.push(intent);
        }
    }
}
