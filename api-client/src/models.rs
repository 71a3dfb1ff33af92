use serde::{Deserialize, Serialize};

/// An airport as reported by the catalog and route endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub iata: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

/// Response of `GET /routes/{iata}`: the queried airport plus its nonstop
/// destinations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoutesResponse {
    pub airport: Airport,
    pub connections: Vec<Airport>,
}

/// External links attached to a destination summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DestinationLinks {
    pub flights: String,
    pub hotels: String,
    pub wikipedia: String,
}

/// Response of `GET /destination/{iata}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DestinationSummary {
    pub airport: Airport,
    pub links: DestinationLinks,
}

/// A stored review as returned by `GET /reviews/{iata}`. Immutable once
/// created; the identifier and timestamp are assigned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /reviews`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReview {
    pub airport_iata: String,
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_airport_catalog_deserializes() {
        let body = json!([
            {
                "iata": "JFK",
                "name": "John F. Kennedy International",
                "city": "New York",
                "country": "United States",
                "lat": 40.6413,
                "lng": -73.7781
            }
        ]);

        let airports: Vec<Airport> = serde_json::from_value(body).unwrap();
        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].iata, "JFK");
        assert_eq!(airports[0].lat, 40.6413);
    }

    #[test]
    fn test_routes_response_deserializes() {
        let body = json!({
            "airport": {
                "iata": "LHR",
                "name": "Heathrow",
                "city": "London",
                "country": "United Kingdom",
                "lat": 51.47,
                "lng": -0.4543
            },
            "connections": [
                {
                    "iata": "JFK",
                    "name": "John F. Kennedy International",
                    "city": "New York",
                    "country": "United States",
                    "lat": 40.6413,
                    "lng": -73.7781
                }
            ]
        });

        let routes: RoutesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(routes.airport.iata, "LHR");
        assert_eq!(routes.connections.len(), 1);
        assert_eq!(routes.connections[0].iata, "JFK");
    }

    #[test]
    fn test_review_uses_the_backend_id_field_and_optional_fields_default() {
        let body = json!({
            "_id": "65ab12",
            "name": "Alex",
            "rating": 5
        });

        let review: Review = serde_json::from_value(body).unwrap();
        assert_eq!(review.id, "65ab12");
        assert_eq!(review.rating, 5);
        assert_eq!(review.comment, None);
        assert_eq!(review.created_at, None);
    }

    #[test]
    fn test_new_review_serializes_with_the_wire_field_names() {
        let review = NewReview {
            airport_iata: "JFK".to_string(),
            name: "Alex".to_string(),
            rating: 5,
            comment: "Great transit".to_string(),
        };

        let body = serde_json::to_value(&review).unwrap();
        assert_eq!(
            body,
            json!({
                "airport_iata": "JFK",
                "name": "Alex",
                "rating": 5,
                "comment": "Great transit"
            })
        );
    }
}
