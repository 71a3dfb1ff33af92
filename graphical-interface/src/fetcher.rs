use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use api_client::models::{DestinationSummary, NewReview, Review};
use api_client::ApiError;

use crate::api::Provider;
use crate::types::Airport;

/// A fetch result delivered back to the UI thread. Responses carry the
/// sequence or generation number of the request that produced them, so the
/// view models can drop the ones a newer request has superseded.
pub enum FetchEvent {
    Catalog(Result<Vec<Airport>, ApiError>),
    Routes {
        seq: u64,
        result: Result<(Airport, Vec<Airport>), ApiError>,
    },
    Summary {
        gen: u64,
        result: Result<DestinationSummary, ApiError>,
    },
    Reviews {
        gen: u64,
        result: Result<Vec<Review>, ApiError>,
    },
    ReviewPosted {
        gen: u64,
        result: Result<(), ApiError>,
    },
}

struct EventSink {
    tx: Sender<FetchEvent>,
    repaint: egui::Context,
}

impl EventSink {
    fn send(&self, event: FetchEvent) {
        // A closed channel just means the UI is gone and the result has
        // nowhere to go.
        let _ = self.tx.send(event);
        self.repaint.request_repaint();
    }
}

/// Issues backend requests on short-lived background threads so the UI stays
/// responsive while fetches are outstanding.
///
/// Every request clones the provider and the channel sender into its thread;
/// the UI thread drains the channel once per frame with `poll` and applies
/// the events through the view-model transition functions.
pub struct Fetcher<P> {
    provider: P,
    tx: Sender<FetchEvent>,
    rx: Receiver<FetchEvent>,
    repaint: egui::Context,
}

impl<P: Provider + Clone + Send + 'static> Fetcher<P> {
    pub fn new(provider: P, repaint: egui::Context) -> Self {
        let (tx, rx) = channel();
        Self {
            provider,
            tx,
            rx,
            repaint,
        }
    }

    /// Drains every event that arrived since the last frame.
    pub fn poll(&self) -> Vec<FetchEvent> {
        self.rx.try_iter().collect()
    }

    /// One-shot catalog fetch, issued at startup.
    pub fn load_catalog(&self) {
        self.spawn(|provider, sink| {
            sink.send(FetchEvent::Catalog(provider.get_airports()));
        });
    }

    /// Fetches the routes for `iata`. The response carries `seq` so a
    /// superseded selection is never committed.
    pub fn load_routes(&self, iata: String, seq: u64) {
        self.spawn(move |provider, sink| {
            let result = provider.get_routes(&iata);
            sink.send(FetchEvent::Routes { seq, result });
        });
    }

    /// Destination page load: the summary first, then the reviews, and the
    /// reviews only when the summary arrived.
    pub fn load_destination(&self, iata: String, gen: u64) {
        self.spawn(move |provider, sink| {
            let summary = provider.get_destination(&iata);
            let summary_ok = summary.is_ok();
            sink.send(FetchEvent::Summary {
                gen,
                result: summary,
            });
            if summary_ok {
                sink.send(FetchEvent::Reviews {
                    gen,
                    result: provider.get_reviews(&iata),
                });
            }
        });
    }

    /// Posts a review and, when the backend accepted it, re-fetches the
    /// review list so the new entry shows up.
    pub fn submit_review(&self, review: NewReview, gen: u64) {
        self.spawn(move |provider, sink| {
            let iata = review.airport_iata.clone();
            let result = provider.submit_review(review).map(|_| ());
            let posted = result.is_ok();
            sink.send(FetchEvent::ReviewPosted { gen, result });
            if posted {
                sink.send(FetchEvent::Reviews {
                    gen,
                    result: provider.get_reviews(&iata),
                });
            }
        });
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(&P, &EventSink) + Send + 'static,
    {
        let provider = self.provider.clone();
        let sink = EventSink {
            tx: self.tx.clone(),
            repaint: self.repaint.clone(),
        };
        thread::spawn(move || job(&provider, &sink));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SelectionState;
    use std::time::{Duration, Instant};
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

    #[derive(Clone)]
    struct FakeProvider {
        slow_iata: Option<&'static str>,
        delay: Duration,
    }

    impl FakeProvider {
        fn instant() -> Self {
            Self {
                slow_iata: None,
                delay: Duration::ZERO,
            }
        }

        fn slow(iata: &'static str, delay: Duration) -> Self {
            Self {
                slow_iata: Some(iata),
                delay,
            }
        }
    }

    impl Provider for FakeProvider {
        fn get_airports(&self) -> Result<Vec<Airport>, ApiError> {
            Ok(vec![airport("AAA"), airport("BBB")])
        }

        fn get_routes(&self, iata: &str) -> Result<(Airport, Vec<Airport>), ApiError> {
            if self.slow_iata == Some(iata) {
                thread::sleep(self.delay);
            }
            Ok((airport(iata), vec![airport("ZZZ")]))
        }

        fn get_destination(&self, _iata: &str) -> Result<DestinationSummary, ApiError> {
            Err(ApiError::Status(404))
        }

        fn get_reviews(&self, _iata: &str) -> Result<Vec<Review>, ApiError> {
            Ok(Vec::new())
        }

        fn submit_review(&self, _review: NewReview) -> Result<Review, ApiError> {
            Err(ApiError::Transport("offline".to_string()))
        }
    }

    fn wait_for_events(fetcher: &Fetcher<FakeProvider>, count: usize) -> Vec<FetchEvent> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut events = Vec::new();
        while events.len() < count && Instant::now() < deadline {
            events.extend(fetcher.poll());
            thread::sleep(Duration::from_millis(5));
        }
        events
    }

    #[test]
    fn test_catalog_events_arrive_over_the_channel() {
        let fetcher = Fetcher::new(FakeProvider::instant(), egui::Context::default());
        fetcher.load_catalog();

        let events = wait_for_events(&fetcher, 1);
        match events.first() {
            Some(FetchEvent::Catalog(Ok(airports))) => assert_eq!(airports.len(), 2),
            _ => panic!("expected a successful catalog event"),
        }
    }

    #[test]
    fn test_a_superseded_selection_never_reaches_the_screen() {
        let fetcher = Fetcher::new(
            FakeProvider::slow("AAA", Duration::from_millis(300)),
            egui::Context::default(),
        );
        let mut selection = SelectionState::new();

        let first = selection.begin_selection();
        fetcher.load_routes("AAA".to_string(), first);
        let second = selection.begin_selection();
        fetcher.load_routes("BBB".to_string(), second);

        for event in wait_for_events(&fetcher, 2) {
            if let FetchEvent::Routes { seq, result } = event {
                match result {
                    Ok((airport, connections)) => {
                        selection.commit_routes(seq, airport, connections)
                    }
                    Err(_) => selection.fail(seq, "Could not load routes".to_string()),
                }
            }
        }

        // Whatever order the two responses resolved in, only the newer
        // selection may be on screen.
        assert_eq!(selection.selected_iata(), Some("BBB"));
        assert!(!selection.loading);
    }

    #[test]
    fn test_a_missing_destination_still_ends_its_page_load() {
        let fetcher = Fetcher::new(FakeProvider::instant(), egui::Context::default());
        fetcher.load_destination("XXX".to_string(), 1);

        let events = wait_for_events(&fetcher, 1);
        match events.first() {
            Some(FetchEvent::Summary { gen: 1, result }) => {
                assert_eq!(result.as_ref().unwrap_err(), &ApiError::Status(404));
            }
            _ => panic!("expected a summary event"),
        }
        // The review fetch is skipped when the summary never arrived.
        assert!(fetcher.poll().is_empty());
    }
}
