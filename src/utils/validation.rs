use crate::domain::model::{GetAllPlacesResponse, GetRsvpResponse, PlaceCategory, PlaceData};
use crate::utils::error::{ContractError, Result};
use serde_json::Value;
use tracing::debug;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks an RSVP lookup payload against the contract and returns the
/// typed response. Pure and idempotent; rejects rather than coerces.
pub fn validate_rsvp_response(payload: &Value) -> Result<GetRsvpResponse> {
    let obj = payload
        .as_object()
        .ok_or_else(|| ContractError::violation("payload", "Expected a JSON object"))?;

    let response = GetRsvpResponse {
        first_name: require_non_empty_string("firstName", obj.get("firstName"))?,
        last_name: require_non_empty_string("lastName", obj.get("lastName"))?,
        plus_one_enabled: require_bool("plusOneEnabled", obj.get("plusOneEnabled"))?,
    };

    debug!(first_name = %response.first_name, "RSVP payload validated");
    Ok(response)
}

/// Checks a places listing payload against the contract. Fails on the
/// first offending element, naming its index and field. Element order is
/// preserved as-is.
pub fn validate_places_response(payload: &Value) -> Result<GetAllPlacesResponse> {
    let obj = payload
        .as_object()
        .ok_or_else(|| ContractError::violation("payload", "Expected a JSON object"))?;

    let elements = match obj.get("places") {
        Some(Value::Array(elements)) => elements,
        Some(_) => return Err(ContractError::violation("places", "Expected an array")),
        None => return Err(ContractError::violation("places", "Required field is missing")),
    };

    let mut places = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        places.push(validate_place(index, element)?);
    }

    debug!(count = places.len(), "places payload validated");
    Ok(GetAllPlacesResponse { places })
}

fn validate_place(index: usize, value: &Value) -> Result<PlaceData> {
    let path = |field: &str| format!("places[{}].{}", index, field);

    let obj = value
        .as_object()
        .ok_or_else(|| ContractError::violation(format!("places[{}]", index), "Expected a JSON object"))?;

    let website = optional_string(&path("website"), obj.get("website"))?;
    if let Some(website) = &website {
        validate_url(&path("website"), website)?;
    }

    let raw_category = require_non_empty_string(&path("category"), obj.get("category"))?;
    let category = raw_category.parse::<PlaceCategory>().map_err(|err| match err {
        ContractError::SchemaViolation { reason, .. } => {
            ContractError::violation(path("category"), reason)
        }
        other => other,
    })?;

    Ok(PlaceData {
        name: require_non_empty_string(&path("name"), obj.get("name"))?,
        address: require_non_empty_string(&path("address"), obj.get("address"))?,
        cost: optional_string(&path("cost"), obj.get("cost"))?,
        distance_from_venue: optional_number(&path("distanceFromVenue"), obj.get("distanceFromVenue"))?,
        distance_from_airport: optional_number(&path("distanceFromAirport"), obj.get("distanceFromAirport"))?,
        website,
        phone_number: optional_string(&path("phoneNumber"), obj.get("phoneNumber"))?,
        category,
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ContractError::violation(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ContractError::violation(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(ContractError::violation(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContractError::violation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

fn require_non_empty_string(field_name: &str, value: Option<&Value>) -> Result<String> {
    match value {
        Some(Value::String(s)) => {
            validate_non_empty_string(field_name, s)?;
            Ok(s.clone())
        }
        Some(_) => Err(ContractError::violation(field_name, "Expected a string")),
        None => Err(ContractError::violation(field_name, "Required field is missing")),
    }
}

fn require_bool(field_name: &str, value: Option<&Value>) -> Result<bool> {
    match value {
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ContractError::violation(field_name, "Expected a boolean")),
        None => Err(ContractError::violation(field_name, "Required field is missing")),
    }
}

// Missing keys and explicit nulls are both "absent" on the wire.
fn optional_string(field_name: &str, value: Option<&Value>) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ContractError::violation(field_name, "Expected a string or null")),
    }
}

fn optional_number(field_name: &str, value: Option<&Value>) -> Result<Option<f64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| ContractError::violation(field_name, "Number is out of range")),
        Some(_) => Err(ContractError::violation(field_name, "Expected a number or null")),
    }
}

impl Validate for GetRsvpResponse {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("firstName", &self.first_name)?;
        validate_non_empty_string("lastName", &self.last_name)?;
        Ok(())
    }
}

impl Validate for PlaceData {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("address", &self.address)?;
        if let Some(website) = &self.website {
            validate_url("website", website)?;
        }
        Ok(())
    }
}

impl Validate for GetAllPlacesResponse {
    fn validate(&self) -> Result<()> {
        for (index, place) in self.places.iter().enumerate() {
            place.validate().map_err(|err| match err {
                ContractError::SchemaViolation { field, reason } => {
                    ContractError::violation(format!("places[{}].{}", index, field), reason)
                }
                other => other,
            })?;
        }
        Ok(())
    }
}
