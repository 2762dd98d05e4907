use crate::domain::model::{GetAllPlacesResponse, GetRsvpResponse};
use crate::utils::error::Result;

/// Seam for the external backend that serves the site's data. The crate
/// defines the shapes it must honor; adapters live with the consumer.
pub trait SiteDataSource: Send + Sync {
    fn lookup_rsvp(&self, first_name: &str, last_name: &str) -> Result<GetRsvpResponse>;

    fn all_places(&self) -> Result<GetAllPlacesResponse>;
}
