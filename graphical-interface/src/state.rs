use std::collections::HashSet;

use crate::types::Airport;

/// An action raised by the map surface or a widget. Renderers only queue
/// intents; the application applies them so every state change goes through
/// the transition functions below.
#[derive(Debug, Clone, PartialEq)]
pub enum MapIntent {
    Select(String),
    Deselect,
    OpenDestination(String),
}

/// Tracks the state for the current airport selection and its nonstop
/// connections.
///
/// Each selection cycle goes `Idle -> Loading -> Ready | Failed`, and a new
/// selection restarts the cycle. The sequence number grows on every
/// transition that supersedes the request in flight, so a response that
/// arrives late is recognized as stale and dropped instead of overwriting a
/// newer selection.
pub struct SelectionState {
    seq: u64,
    pub airport: Option<Airport>,
    pub connections: Vec<Airport>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self {
            seq: 0,
            airport: None,
            connections: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Clears the previous selection, connections and error in one step and
    /// marks the new request as in flight. Returns the sequence number the
    /// response must carry to be committed.
    pub fn begin_selection(&mut self) -> u64 {
        self.airport = None;
        self.connections.clear();
        self.error = None;
        self.loading = true;
        self.seq += 1;
        self.seq
    }

    /// Commits a route response. A response with a stale sequence number is
    /// ignored, so only the most recently requested selection can reach the
    /// screen.
    pub fn commit_routes(&mut self, seq: u64, airport: Airport, connections: Vec<Airport>) {
        if seq != self.seq {
            return;
        }
        self.airport = Some(airport);
        self.connections = connections;
        self.loading = false;
        self.error = None;
    }

    /// Records a failed route fetch, leaving the selection empty. Stale
    /// failures are dropped like stale successes.
    pub fn fail(&mut self, seq: u64, message: String) {
        if seq != self.seq {
            return;
        }
        self.airport = None;
        self.connections.clear();
        self.loading = false;
        self.error = Some(message);
    }

    /// Deselects. Also bumps the sequence so an in-flight fetch cannot
    /// resurrect the cleared selection.
    pub fn clear(&mut self) {
        self.seq += 1;
        self.airport = None;
        self.connections.clear();
        self.loading = false;
        self.error = None;
    }

    pub fn selected_iata(&self) -> Option<&str> {
        self.airport.as_ref().map(|airport| airport.iata.as_str())
    }
}

/// Tracks the airports to display.
pub struct ViewState {
    pub airports: Vec<Airport>,
    pub catalog_error: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            airports: Vec::new(),
            catalog_error: None,
        }
    }

    /// Applies the result of the one-shot catalog fetch. On failure the map
    /// degrades to an empty catalog with a visible message; there is no
    /// automatic retry.
    pub fn apply_catalog(&mut self, result: Result<Vec<Airport>, String>) {
        match result {
            Ok(airports) => {
                self.airports = airports;
                self.catalog_error = None;
            }
            Err(message) => {
                self.airports.clear();
                self.catalog_error = Some(message);
            }
        }
    }

    /// The airports the map should draw: the whole catalog when nothing is
    /// selected, otherwise the selected airport plus its connections, without
    /// duplicates.
    pub fn visible_airports(&self, selection: &SelectionState) -> Vec<Airport> {
        let Some(selected) = &selection.airport else {
            return self.airports.clone();
        };

        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(selected.iata.as_str());
        let mut visible = vec![selected.clone()];
        for connection in &selection.connections {
            if seen.insert(connection.iata.as_str()) {
                visible.push(connection.clone());
            }
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkers::Position;

    fn airport(iata: &str) -> Airport {
        Airport::new(
            format!("{} International", iata),
            iata.to_string(),
            "City".to_string(),
            "Country".to_string(),
            Position::from_lat_lon(0.0, 0.0),
        )
    }

    #[test]
    fn test_a_new_selection_clears_the_previous_one_atomically() {
        let mut selection = SelectionState::new();
        let seq = selection.begin_selection();
        selection.commit_routes(seq, airport("AAA"), vec![airport("BBB")]);
        selection.error = Some("old error".to_string());

        selection.begin_selection();
        assert_eq!(selection.airport, None);
        assert!(selection.connections.is_empty());
        assert_eq!(selection.error, None);
        assert!(selection.loading);
    }

    #[test]
    fn test_a_stale_response_never_overwrites_a_newer_selection() {
        let mut selection = SelectionState::new();
        let first = selection.begin_selection();
        let second = selection.begin_selection();

        selection.commit_routes(second, airport("BBB"), vec![airport("CCC")]);
        selection.commit_routes(first, airport("AAA"), vec![airport("DDD")]);

        assert_eq!(selection.selected_iata(), Some("BBB"));
        assert_eq!(selection.connections, vec![airport("CCC")]);

        selection.fail(first, "slow failure".to_string());
        assert_eq!(selection.error, None);
        assert_eq!(selection.selected_iata(), Some("BBB"));
    }

    #[test]
    fn test_a_failed_selection_reports_an_error_and_stays_empty() {
        let mut selection = SelectionState::new();
        let seq = selection.begin_selection();
        selection.fail(seq, "Could not load routes".to_string());

        assert_eq!(selection.airport, None);
        assert!(selection.connections.is_empty());
        assert!(!selection.loading);
        assert_eq!(selection.error, Some("Could not load routes".to_string()));
    }

    #[test]
    fn test_deselection_invalidates_the_request_in_flight() {
        let mut selection = SelectionState::new();
        let seq = selection.begin_selection();
        selection.clear();

        selection.commit_routes(seq, airport("AAA"), vec![airport("BBB")]);
        assert_eq!(selection.airport, None);
        assert!(!selection.loading);
    }

    #[test]
    fn test_all_airports_are_visible_without_a_selection() {
        let mut view = ViewState::new();
        view.apply_catalog(Ok(vec![airport("AAA"), airport("BBB"), airport("CCC")]));

        let selection = SelectionState::new();
        assert_eq!(view.visible_airports(&selection).len(), 3);
    }

    #[test]
    fn test_a_selection_narrows_visibility_to_itself_and_its_connections() {
        let mut view = ViewState::new();
        view.apply_catalog(Ok(vec![airport("AAA"), airport("BBB"), airport("CCC")]));

        let mut selection = SelectionState::new();
        let seq = selection.begin_selection();
        // A connection repeated by the backend, and one echoing the selected
        // airport, must not produce duplicate markers.
        selection.commit_routes(
            seq,
            airport("AAA"),
            vec![airport("BBB"), airport("BBB"), airport("AAA")],
        );

        let visible = view.visible_airports(&selection);
        assert_eq!(visible, vec![airport("AAA"), airport("BBB")]);
    }

    #[test]
    fn test_a_failed_catalog_degrades_to_an_empty_map_with_a_message() {
        let mut view = ViewState::new();
        view.apply_catalog(Ok(vec![airport("AAA")]));
        view.apply_catalog(Err("Failed to load airports".to_string()));

        assert!(view.airports.is_empty());
        assert_eq!(
            view.catalog_error,
            Some("Failed to load airports".to_string())
        );
    }
}
