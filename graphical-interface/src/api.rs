use api_client::models::{self, DestinationSummary, NewReview, Review};
use api_client::{ApiClient, ApiError};
use walkers::Position;

use crate::types::Airport;

/// A trait that defines the required methods for a provider of airport,
/// route, destination and review data. This trait is implemented by any
/// structure that talks to the backend on behalf of the graphical interface.
pub trait Provider {
    fn get_airports(&self) -> Result<Vec<Airport>, ApiError>;

    fn get_routes(&self, iata: &str) -> Result<(Airport, Vec<Airport>), ApiError>;

    fn get_destination(&self, iata: &str) -> Result<DestinationSummary, ApiError>;

    fn get_reviews(&self, iata: &str) -> Result<Vec<Review>, ApiError>;

    fn submit_review(&self, review: NewReview) -> Result<Review, ApiError>;
}

/// The REST-backed provider used by the application.
///
/// Wire airports carry raw latitude/longitude fields; the mapping into view
/// airports attaches the `walkers` position the map renderers work with.
#[derive(Debug, Clone)]
pub struct Api {
    client: ApiClient,
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}

impl Api {
    /// Creates a provider pointing at the configured backend.
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }
}

fn to_view_airport(airport: models::Airport) -> Airport {
    Airport::new(
        airport.name,
        airport.iata,
        airport.city,
        airport.country,
        Position::from_lat_lon(airport.lat, airport.lng),
    )
}

impl Provider for Api {
    fn get_airports(&self) -> Result<Vec<Airport>, ApiError> {
        Ok(self
            .client
            .airports()?
            .into_iter()
            .map(to_view_airport)
            .collect())
    }

    fn get_routes(&self, iata: &str) -> Result<(Airport, Vec<Airport>), ApiError> {
        let routes = self.client.routes(iata, None)?;
        let airport = to_view_airport(routes.airport);
        let connections = routes
            .connections
            .into_iter()
            .map(to_view_airport)
            .collect();
        Ok((airport, connections))
    }

    fn get_destination(&self, iata: &str) -> Result<DestinationSummary, ApiError> {
        self.client.destination(iata)
    }

    fn get_reviews(&self, iata: &str) -> Result<Vec<Review>, ApiError> {
        self.client.reviews(iata)
    }

    fn submit_review(&self, review: NewReview) -> Result<Review, ApiError> {
        self.client.create_review(&review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_airports_keep_their_coordinates_as_a_position() {
        let wire = models::Airport {
            iata: "JFK".to_string(),
            name: "John F. Kennedy International".to_string(),
            city: "New York".to_string(),
            country: "United States".to_string(),
            lat: 40.6413,
            lng: -73.7781,
        };

        let airport = to_view_airport(wire);
        assert_eq!(airport.iata, "JFK");
        assert_eq!(airport.city, "New York");
        assert_eq!(airport.position.lat(), 40.6413);
        assert_eq!(airport.position.lon(), -73.7781);
    }
}
