use walkers::Position;

use super::Airport;

/// Represents the geographical boundaries of a set of airports, defined by
/// minimum and maximum latitude and longitude.
#[derive(Debug, Clone, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapBounds {
    /// Computes the bounding box of a set of airports. An empty set has no
    /// bounds; callers fall back to the default world view instead of
    /// treating that as an error.
    pub fn from_airports(airports: &[Airport]) -> Option<MapBounds> {
        let first = airports.first()?;
        let mut bounds = MapBounds {
            min_lat: first.position.lat(),
            max_lat: first.position.lat(),
            min_lon: first.position.lon(),
            max_lon: first.position.lon(),
        };

        for airport in &airports[1..] {
            let (lat, lon) = (airport.position.lat(), airport.position.lon());
            bounds.min_lat = bounds.min_lat.min(lat);
            bounds.max_lat = bounds.max_lat.max(lat);
            bounds.min_lon = bounds.min_lon.min(lon);
            bounds.max_lon = bounds.max_lon.max(lon);
        }

        Some(bounds)
    }

    /// The center of the box, used to frame the tile map on the catalog.
    pub fn center(&self) -> Position {
        Position::from_lat_lon(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Checks whether a given position is within the bounds.
    pub fn contains(&self, pos: &Position) -> bool {
        pos.lat() >= self.min_lat
            && pos.lat() <= self.max_lat
            && pos.lon() >= self.min_lon
            && pos.lon() <= self.max_lon
    }
}
