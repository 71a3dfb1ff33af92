use std::{cell::RefCell, rc::Rc};

use egui::{Align2, Color32, FontId, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget};

use crate::plugins::{LABEL_COLOR, MARKER_COLOR, ROUTE_COLOR, SELECTED_COLOR};
use crate::projection::project_point;
use crate::state::{MapIntent, SelectionState};
use crate::types::Airport;

const OCEAN_COLOR: Color32 = Color32::from_rgb(15, 23, 42);
const GRID_COLOR: Color32 = Color32::from_rgb(30, 41, 59);
const GRID_COLUMNS: usize = 12;
const GRID_ROWS: usize = 6;

/// Flat equirectangular rendering of the whole world: a grid background with
/// one marker per visible airport and a line per connection. An alternative
/// to the tile map that shares the same state and raises the same intents.
pub struct FlatMap<'a> {
    airports: &'a [Airport],
    selection: &'a SelectionState,
    intents: Rc<RefCell<Vec<MapIntent>>>,
}

impl<'a> FlatMap<'a> {
    pub fn new(
        airports: &'a [Airport],
        selection: &'a SelectionState,
        intents: Rc<RefCell<Vec<MapIntent>>>,
    ) -> Self {
        Self {
            airports,
            selection,
            intents,
        }
    }
}

impl Widget for FlatMap<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, OCEAN_COLOR);
        for i in 1..GRID_COLUMNS {
            let x = rect.min.x + rect.width() * (i as f32 / GRID_COLUMNS as f32);
            painter.line_segment(
                [Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)],
                Stroke::new(1.0, GRID_COLOR),
            );
        }
        for i in 1..GRID_ROWS {
            let y = rect.min.y + rect.height() * (i as f32 / GRID_ROWS as f32);
            painter.line_segment(
                [Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)],
                Stroke::new(1.0, GRID_COLOR),
            );
        }

        let place = |airport: &Airport| -> Pos2 {
            let point = project_point(
                airport.position.lat(),
                airport.position.lon(),
                rect.width(),
                rect.height(),
            );
            rect.min + point.to_vec2()
        };

        if let Some(selected) = &self.selection.airport {
            let from = place(selected);
            for destination in &self.selection.connections {
                if destination.iata == selected.iata {
                    continue;
                }
                painter.line_segment(
                    [from, place(destination)],
                    Stroke::new(2.0, ROUTE_COLOR.gamma_multiply(0.45)),
                );
            }
        }

        for airport in self.airports {
            let center = place(airport);
            let selected = self.selection.selected_iata() == Some(airport.iata.as_str());

            let marker = ui.interact(
                Rect::from_center_size(center, Vec2::splat(16.0)),
                response.id.with(&airport.iata),
                Sense::click(),
            );
            if marker.hovered() {
                painter.circle_stroke(center, 9.0, Stroke::new(1.0, SELECTED_COLOR));
            }
            let (radius, color) = if selected {
                (6.0, SELECTED_COLOR)
            } else {
                (4.0, MARKER_COLOR)
            };
            painter.circle_filled(center, radius, color);
            painter.text(
                center + Vec2::new(8.0, -8.0),
                Align2::LEFT_BOTTOM,
                &airport.iata,
                FontId::proportional(12.0),
                LABEL_COLOR,
            );

            if marker.clicked() {
                let intent = if selected {
                    MapIntent::Deselect
                } else {
                    MapIntent::Select(airport.iata.clone())
                };
                self.intents.borrow_mut().push(intent);
            }
        }

        // Destination hotspots are interacted with last so they sit on top:
        // opening a destination must not also toggle the marker underneath.
        if let Some(selected) = &self.selection.airport {
            for destination in &self.selection.connections {
                if destination.iata == selected.iata {
                    continue;
                }
                let center = place(destination);
                let hotspot = ui.interact(
                    Rect::from_center_size(center, Vec2::splat(26.0)),
                    response.id.with(("destination", &destination.iata)),
                    Sense::click(),
                );
                if hotspot.hovered() {
                    painter.circle_stroke(center, 10.0, Stroke::new(1.5, ROUTE_COLOR));
                }
                if hotspot.clicked() {
                    self.intents
                        .borrow_mut()
                        .push(MapIntent::OpenDestination(destination.iata.clone()));
                }
            }
        }

        response
    }
}
