mod driver;
mod fare;
mod location;
mod ride;
mod route;

pub use driver::{Driver, DriverId, DriverOption, Review};
pub use fare::{Amount, Fare};
pub use location::Coordinates;
pub use ride::{ConfirmRide, DriverRef, NewRide, RideDriver, RideHistory, RideId, RideRecord};
pub use route::{FareOptions, RideEstimate, RouteEstimate, Unavailable};
