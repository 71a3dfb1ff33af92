use api_client::models::{DestinationSummary, Review};
use api_client::ApiError;

/// Where the destination page is in its load cycle. `NotFound` (the backend
/// reported no such destination) renders differently from `Failed` (the
/// request itself broke).
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationPhase {
    Loading,
    Ready,
    NotFound,
    Failed(String),
}

/// The review form contents. Kept across failed submissions so the user can
/// retry, reset to defaults after a successful one.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            rating: 5,
            comment: String::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = ReviewDraft::new();
    }
}

/// State of one destination page entry: the summary, the review list and the
/// submission form.
///
/// `gen` is unique per page entry; fetch events tagged with another
/// generation belong to a page the user already left and are ignored.
pub struct DestinationState {
    gen: u64,
    pub iata: String,
    pub origin: Option<String>,
    pub phase: DestinationPhase,
    pub summary: Option<DestinationSummary>,
    pub reviews: Vec<Review>,
    pub draft: ReviewDraft,
    pub posting: bool,
    pub post_error: Option<String>,
}

impl DestinationState {
    pub fn new(iata: String, origin: Option<String>, gen: u64) -> Self {
        Self {
            gen,
            iata,
            origin,
            phase: DestinationPhase::Loading,
            summary: None,
            reviews: Vec::new(),
            draft: ReviewDraft::new(),
            posting: false,
            post_error: None,
        }
    }

    pub fn gen(&self) -> u64 {
        self.gen
    }

    /// Applies the summary fetch result. Loading always ends here, whatever
    /// the outcome.
    pub fn apply_summary(&mut self, gen: u64, result: Result<DestinationSummary, ApiError>) {
        if gen != self.gen {
            return;
        }
        match result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.phase = DestinationPhase::Ready;
            }
            Err(err) if err.is_not_found() => {
                self.phase = DestinationPhase::NotFound;
            }
            Err(err) => {
                log::warn!("destination fetch for {} failed: {}", self.iata, err);
                self.phase = DestinationPhase::Failed("Failed to load destination".to_string());
            }
        }
    }

    /// Applies a review-list fetch. A failed list leaves the page usable with
    /// no reviews shown.
    pub fn apply_reviews(&mut self, gen: u64, result: Result<Vec<Review>, ApiError>) {
        if gen != self.gen {
            return;
        }
        match result {
            Ok(reviews) => self.reviews = reviews,
            Err(err) => log::warn!("review fetch for {} failed: {}", self.iata, err),
        }
    }

    /// Marks a submission as in flight so the submit control can be disabled
    /// against duplicate submits.
    pub fn begin_post(&mut self) {
        self.posting = true;
        self.post_error = None;
    }

    /// Applies the submission outcome: reset the draft on success, keep it
    /// for a retry on failure.
    pub fn apply_post(&mut self, gen: u64, result: Result<(), ApiError>) {
        if gen != self.gen {
            return;
        }
        self.posting = false;
        match result {
            Ok(()) => self.draft.reset(),
            Err(err) => {
                log::warn!("review submission for {} failed: {}", self.iata, err);
                self.post_error = Some("Could not publish review".to_string());
            }
        }
    }

    /// The URL the "Search flights" link should open, preferring a search
    /// parameterized by origin and destination over the generic backend link.
    pub fn flight_url(&self) -> Option<String> {
        let summary = self.summary.as_ref()?;
        Some(flight_search_url(
            self.origin.as_deref(),
            &summary.airport.iata,
            &summary.links.flights,
        ))
    }
}

/// Builds the outbound flight-search URL. Falls back to the generic link when
/// no origin context is present or when the generic link does not parse as a
/// URL.
pub fn flight_search_url(origin: Option<&str>, destination: &str, generic: &str) -> String {
    let Some(origin) = origin.filter(|code| !code.is_empty()) else {
        return generic.to_string();
    };
    if url::Url::parse(generic).is_err() {
        return generic.to_string();
    }
    format!(
        "https://www.google.com/travel/flights?q=Flights%20from%20{}%20to%20{}",
        urlencoding::encode(origin),
        urlencoding::encode(destination)
    )
}
