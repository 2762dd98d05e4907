pub mod domain;
pub mod utils;

pub use domain::model::{GetAllPlacesResponse, GetRsvpResponse, PlaceCategory, PlaceData};
pub use domain::ports::SiteDataSource;
pub use utils::error::{ContractError, Result};
pub use utils::validation::{validate_places_response, validate_rsvp_response, Validate};
