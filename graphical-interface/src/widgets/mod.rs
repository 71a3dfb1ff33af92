mod airport;
mod airports;
mod destination;
pub use airport::WidgetAirport;
pub use airports::WidgetAirports;
pub use destination::{DestinationAction, WidgetDestination};
