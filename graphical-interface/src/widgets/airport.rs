use std::{cell::RefCell, rc::Rc};

use egui_extras::{Column, TableBuilder};

use crate::state::{MapIntent, SelectionState};
use crate::types::Airport;

/// A widget for displaying information about the selected airport.
///
/// This widget includes airport details (such as its IATA code and city) and
/// the table of nonstop destinations; clicking a destination row opens its
/// summary page.
pub struct WidgetAirport {
    pub selected_airport: Airport,
}

impl WidgetAirport {
    /// Creates a new `WidgetAirport` for a given airport.
    pub fn new(selected_airport: Airport) -> Self {
        Self { selected_airport }
    }

    /// This method shows a window with details about the selected airport and
    /// its nonstop destinations. Returns `false` once the user closed it.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        selection: &SelectionState,
        intents: &Rc<RefCell<Vec<MapIntent>>>,
    ) -> bool {
        let mut open = true;

        egui::Window::new(format!("Airport {}", self.selected_airport.name))
            .resizable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([20.0, 20.0])
            .show(ctx, |ui| {
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "IATA code: {}",
                            self.selected_airport.iata
                        ))
                        .size(16.0),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "City: {}, {}",
                            self.selected_airport.city, self.selected_airport.country
                        ))
                        .size(16.0),
                    );
                });

                ui.add_space(15.0);

                ui.label(
                    egui::RichText::new("Nonstop destinations")
                        .size(18.0)
                        .strong(),
                );
                ui.add_space(10.0);

                if selection.connections.is_empty() {
                    ui.label("No nonstop destinations reported.");
                } else {
                    self.destinations_table(ui, selection, intents);
                }
            });

        open
    }

    fn destinations_table(
        &self,
        ui: &mut egui::Ui,
        selection: &SelectionState,
        intents: &Rc<RefCell<Vec<MapIntent>>>,
    ) {
        egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
            TableBuilder::new(ui)
                .column(Column::auto())
                .column(Column::remainder())
                .sense(egui::Sense::click())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Code");
                    });
                    header.col(|ui| {
                        ui.strong("Destination");
                    });
                })
                .body(|mut body| {
                    for destination in &selection.connections {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(&destination.iata);
                            });

                            row.col(|ui| {
                                ui.label(format!(
                                    "{} ({})",
                                    destination.city, destination.name
                                ));
                            });

                            if row.response().clicked() {
                                intents
                                    .borrow_mut()
                                    .push(MapIntent::OpenDestination(destination.iata.clone()));
                            }
                        });
                    }
                });
        });
    }
}
