use walkers::Position;

/// Represents an airport with its IATA code, display fields, and geographical
/// position.

#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub name: String,
    pub iata: String,
    pub city: String,
    pub country: String,
    pub position: Position,
}

impl Airport {
    pub fn new(
        name: String,
        iata: String,
        city: String,
        country: String,
        position: Position,
    ) -> Self {
        Self {
            name,
            iata,
            city,
            country,
            position,
        }
    }
}
