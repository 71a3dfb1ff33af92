use std::time::Duration;

use crate::config;
use crate::errors::ApiError;
use crate::models::{Airport, DestinationSummary, NewReview, Review, RoutesResponse};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// A client for the SkyLines backend REST API.
///
/// Cloning is cheap: every clone shares the underlying HTTP agent, so one
/// client can be handed to several background fetch threads. The timeout on
/// the agent bounds how long a hung request can keep a view in its loading
/// state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Creates a client pointing at the configured backend.
    pub fn new() -> Self {
        Self::with_base_url(config::base_url())
    }

    /// Creates a client pointing at an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /airports`: the full airport catalog.
    pub fn airports(&self) -> Result<Vec<Airport>, ApiError> {
        self.get_json(&format!("{}/airports", self.base_url))
    }

    /// `GET /routes/{iata}`: the airport plus its nonstop destinations,
    /// optionally capped by `limit`.
    pub fn routes(&self, iata: &str, limit: Option<u32>) -> Result<RoutesResponse, ApiError> {
        self.get_json(&self.routes_url(iata, limit))
    }

    /// `GET /destination/{iata}`: the destination summary with its external
    /// links.
    pub fn destination(&self, iata: &str) -> Result<DestinationSummary, ApiError> {
        self.get_json(&format!("{}/destination/{}", self.base_url, iata))
    }

    /// `GET /reviews/{iata}`: the destination's reviews in server order.
    pub fn reviews(&self, iata: &str) -> Result<Vec<Review>, ApiError> {
        self.get_json(&format!("{}/reviews/{}", self.base_url, iata))
    }

    /// `POST /reviews`: stores a review and returns it as created.
    pub fn create_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        let response = self
            .agent
            .post(&format!("{}/reviews", self.base_url))
            .send_json(review)
            .map_err(classify)?;
        decode(response)
    }

    fn routes_url(&self, iata: &str, limit: Option<u32>) -> String {
        let mut url = format!("{}/routes/{}", self.base_url, iata);
        if let Some(limit) = limit {
            url.push_str(&format!("?limit={}", limit));
        }
        url
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.agent.get(url).call().map_err(classify)?;
        decode(response)
    }
}

fn classify(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(code, _) => ApiError::Status(code),
        ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
    }
}

fn decode<T: serde::de::DeserializeOwned>(response: ureq::Response) -> Result<T, ApiError> {
    response
        .into_json::<T>()
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_trailing_slash_in_the_base_url_is_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_the_routes_url_carries_the_optional_limit() {
        let client = ApiClient::with_base_url("http://localhost:8000");
        assert_eq!(
            client.routes_url("LHR", None),
            "http://localhost:8000/routes/LHR"
        );
        assert_eq!(
            client.routes_url("LHR", Some(25)),
            "http://localhost:8000/routes/LHR?limit=25"
        );
    }
}
