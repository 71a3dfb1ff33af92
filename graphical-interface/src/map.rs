use std::{cell::RefCell, rc::Rc};

use api_client::models::NewReview;
use egui::Context;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use crate::{
    api::Api,
    destination::DestinationState,
    fetcher::{FetchEvent, Fetcher},
    flat_map::FlatMap,
    plugins,
    state::{MapIntent, SelectionState, ViewState},
    types::MapBounds,
    widgets::{DestinationAction, WidgetAirport, WidgetAirports, WidgetDestination},
    windows,
};

const INITIAL_LAT: f64 = 30.0;
const INITIAL_LON: f64 = 0.0;
const INITIAL_ZOOM: f64 = 2.0;

/// Which rendering strategy draws the explorer map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapRenderer {
    Tiles,
    Flat,
}

enum Page {
    Explorer,
    Destination(DestinationState),
}

/// The main application struct that manages the state and UI of the route
/// explorer and the destination pages.
///
/// `MyApp` integrates the map renderers, the window widgets, and the
/// background fetcher into a cohesive interface over the backend data.
pub struct MyApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    renderer: MapRenderer,
    selection_state: SelectionState,
    view_state: ViewState,
    intents: Rc<RefCell<Vec<MapIntent>>>,
    fetcher: Fetcher<Api>,
    page: Page,
    page_counter: u64,
    airport_widget: Option<WidgetAirport>,
    home: Position,
}

impl MyApp {
    /// Creates a new `MyApp` instance, initializing the map and issuing the
    /// one-shot catalog fetch.
    pub fn new(egui_ctx: Context, api: Api) -> Self {
        let mut initial_map_memory = MapMemory::default();
        let _ = initial_map_memory.set_zoom(INITIAL_ZOOM);

        let fetcher = Fetcher::new(api, egui_ctx.clone());
        fetcher.load_catalog();

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx,
            )),
            map_memory: initial_map_memory,
            renderer: MapRenderer::Tiles,
            selection_state: SelectionState::new(),
            view_state: ViewState::new(),
            intents: Rc::new(RefCell::new(Vec::new())),
            fetcher,
            page: Page::Explorer,
            page_counter: 0,
            airport_widget: None,
            home: Position::from_lat_lon(INITIAL_LAT, INITIAL_LON),
        }
    }

    fn apply_fetch_events(&mut self) {
        for event in self.fetcher.poll() {
            match event {
                FetchEvent::Catalog(result) => {
                    let result = result.map_err(|err| {
                        log::error!("catalog fetch failed: {}", err);
                        "Failed to load airports".to_string()
                    });
                    self.view_state.apply_catalog(result);
                    if let Some(bounds) = MapBounds::from_airports(&self.view_state.airports) {
                        self.home = bounds.center();
                    }
                }
                FetchEvent::Routes { seq, result } => match result {
                    Ok((airport, connections)) => {
                        self.selection_state.commit_routes(seq, airport, connections);
                    }
                    Err(err) => {
                        log::error!("route fetch failed: {}", err);
                        self.selection_state
                            .fail(seq, "Could not load routes".to_string());
                    }
                },
                FetchEvent::Summary { gen, result } => {
                    if let Page::Destination(state) = &mut self.page {
                        state.apply_summary(gen, result);
                    }
                }
                FetchEvent::Reviews { gen, result } => {
                    if let Page::Destination(state) = &mut self.page {
                        state.apply_reviews(gen, result);
                    }
                }
                FetchEvent::ReviewPosted { gen, result } => {
                    if let Page::Destination(state) = &mut self.page {
                        state.apply_post(gen, result);
                    }
                }
            }
        }
    }

    fn drain_intents(&mut self) {
        let intents: Vec<MapIntent> = self.intents.borrow_mut().drain(..).collect();
        for intent in intents {
            match intent {
                MapIntent::Select(iata) => {
                    let seq = self.selection_state.begin_selection();
                    self.fetcher.load_routes(iata, seq);
                }
                MapIntent::Deselect => self.selection_state.clear(),
                MapIntent::OpenDestination(iata) => self.open_destination(iata),
            }
        }
    }

    /// Switches to the destination page, carrying the selected airport as
    /// origin context for the flight-search link.
    fn open_destination(&mut self, iata: String) {
        let origin = self.selection_state.selected_iata().map(str::to_string);
        self.page_counter += 1;
        let state = DestinationState::new(iata.clone(), origin, self.page_counter);
        self.fetcher.load_destination(iata, self.page_counter);
        self.page = Page::Destination(state);
    }

    fn show_explorer(&mut self, ctx: &egui::Context) {
        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let visible = self.view_state.visible_airports(&self.selection_state);

                match self.renderer {
                    MapRenderer::Tiles => {
                        let airport_plugin = plugins::Airports::new(
                            &visible,
                            self.selection_state.selected_iata().map(str::to_string),
                            self.intents.clone(),
                        );

                        let tiles = self.tiles.as_mut();
                        let mut map = Map::new(Some(tiles), &mut self.map_memory, self.home)
                            .with_plugin(airport_plugin);
                        if let Some(selected) = &self.selection_state.airport {
                            map = map.with_plugin(plugins::Routes::new(
                                selected,
                                &self.selection_state.connections,
                                self.intents.clone(),
                            ));
                        }
                        ui.add(map);
                    }
                    MapRenderer::Flat => {
                        ui.add(FlatMap::new(
                            &visible,
                            &self.selection_state,
                            self.intents.clone(),
                        ));
                    }
                }

                if self.selection_state.loading {
                    egui::Area::new("routes_loading".into())
                        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                        .show(ctx, |ui| {
                            egui::Frame::popup(ui.style()).show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.add(egui::Spinner::new());
                                    ui.label("Loading routes…");
                                });
                            });
                        });
                }

                let error = self
                    .selection_state
                    .error
                    .as_ref()
                    .or(self.view_state.catalog_error.as_ref());
                if let Some(error) = error {
                    egui::Area::new("map_error".into())
                        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -20.0])
                        .show(ctx, |ui| {
                            ui.colored_label(egui::Color32::LIGHT_RED, error);
                        });
                }

                ui.add(WidgetAirports::new(
                    &self.view_state,
                    &self.selection_state,
                    self.intents.clone(),
                ));

                let selected_airport = self.selection_state.airport.clone();
                if let Some(airport) = selected_airport {
                    let rebuild = match &self.airport_widget {
                        Some(widget) => widget.selected_airport != airport,
                        None => true,
                    };
                    if rebuild {
                        self.airport_widget = Some(WidgetAirport::new(airport));
                    }
                    if let Some(widget) = &mut self.airport_widget {
                        if !widget.show(ctx, &self.selection_state, &self.intents) {
                            self.airport_widget = None;
                            self.intents.borrow_mut().push(MapIntent::Deselect);
                        }
                    }
                } else {
                    self.airport_widget = None;
                }

                if self.renderer == MapRenderer::Tiles {
                    windows::zoom(ui, &mut self.map_memory);
                }
                windows::renderer_toggle(ui, &mut self.renderer);
            });
    }

    fn show_destination(&mut self, ctx: &egui::Context) {
        let mut action = DestinationAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Page::Destination(state) = &mut self.page {
                    action = WidgetDestination::ui(ui, state);
                }
            });
        });

        match action {
            DestinationAction::Back => self.page = Page::Explorer,
            DestinationAction::Submit => self.submit_review(),
            DestinationAction::None => {}
        }
    }

    fn submit_review(&mut self) {
        let Page::Destination(state) = &mut self.page else {
            return;
        };
        if state.posting {
            return;
        }
        state.begin_post();
        let gen = state.gen();
        let review = NewReview {
            airport_iata: state.iata.clone(),
            name: state.draft.name.trim().to_string(),
            rating: state.draft.rating,
            comment: state.draft.comment.clone(),
        };
        self.fetcher.submit_review(review, gen);
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_fetch_events();

        if matches!(self.page, Page::Explorer) {
            self.show_explorer(ctx);
        } else {
            self.show_destination(ctx);
        }

        self.drain_intents();
    }
}
