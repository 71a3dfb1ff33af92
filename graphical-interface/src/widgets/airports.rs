use std::{cell::RefCell, rc::Rc};

use egui::Widget;
use egui_extras::{Column, TableBuilder};

use crate::state::{MapIntent, SelectionState, ViewState};

/// Shows a list of the airport catalog; clicking a row selects that airport.
pub struct WidgetAirports<'a, 'b> {
    pub view_state: &'a ViewState,
    pub selection_state: &'b SelectionState,
    intents: Rc<RefCell<Vec<MapIntent>>>,
}

impl<'a, 'b> WidgetAirports<'a, 'b> {
    pub fn new(
        view_state: &'a ViewState,
        selection_state: &'b SelectionState,
        intents: Rc<RefCell<Vec<MapIntent>>>,
    ) -> Self {
        Self {
            view_state,
            selection_state,
            intents,
        }
    }
}

impl Widget for WidgetAirports<'_, '_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let response = ui.allocate_response(egui::vec2(0., 0.), egui::Sense::hover());

        egui::Window::new("Airports")
            .resizable(false)
            .collapsible(true)
            .anchor(egui::Align2::RIGHT_TOP, [-20.0, 20.0])
            .show(ui.ctx(), |ui| {
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    TableBuilder::new(ui)
                        .column(Column::auto())
                        .column(Column::remainder())
                        .sense(egui::Sense::click())
                        .header(20.0, |mut header| {
                            header.col(|ui| {
                                ui.strong("Code");
                            });
                            header.col(|ui| {
                                ui.strong("Name");
                            });
                        })
                        .body(|mut body| {
                            for airport in &self.view_state.airports {
                                body.row(18.0, |mut row| {
                                    let selected = self.selection_state.selected_iata()
                                        == Some(airport.iata.as_str());
                                    row.set_selected(selected);

                                    row.col(|ui| {
                                        ui.label(&airport.iata);
                                    });

                                    row.col(|ui| {
                                        ui.label(&airport.name);
                                    });

                                    if row.response().clicked() {
                                        let intent = if selected {
                                            MapIntent::Deselect
                                        } else {
                                            MapIntent::Select(airport.iata.clone())
                                        };
                                        self.intents.borrow_mut().push(intent);
                                    }
                                });
                            }
                        });
                });
            });

        response
    }
}
