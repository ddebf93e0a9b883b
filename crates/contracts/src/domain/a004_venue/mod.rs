pub mod aggregate;

pub use aggregate::{Venue, VenueDto};
