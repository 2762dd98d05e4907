use anyhow::Result;
use serde_json::json;
use wedding_site_contract::{
    validate_places_response, GetAllPlacesResponse, PlaceCategory, PlaceData, Validate,
};

fn hotel_payload() -> serde_json::Value {
    json!({
        "places": [{
            "name": "Hotel X",
            "address": "1 Main St",
            "cost": null,
            "distanceFromVenue": 2.5,
            "distanceFromAirport": null,
            "website": null,
            "phoneNumber": null,
            "category": "LODGING",
        }]
    })
}

#[test]
fn test_valid_places_payload_with_nulls() -> Result<()> {
    let response = validate_places_response(&hotel_payload())?;
    assert_eq!(response.places.len(), 1);

    let hotel = &response.places[0];
    assert_eq!(hotel.name, "Hotel X");
    assert_eq!(hotel.address, "1 Main St");
    assert_eq!(hotel.cost, None);
    assert_eq!(hotel.distance_from_venue, Some(2.5));
    assert_eq!(hotel.distance_from_airport, None);
    assert_eq!(hotel.category, PlaceCategory::Lodging);
    Ok(())
}

#[test]
fn test_absent_optional_keys_are_valid() -> Result<()> {
    let payload = json!({
        "places": [{
            "name": "Trattoria Y",
            "address": "2 Side St",
            "category": "RESTAURANT",
        }]
    });

    let response = validate_places_response(&payload)?;
    assert_eq!(response.places[0].cost, None);
    assert_eq!(response.places[0].website, None);
    assert_eq!(response.places[0].phone_number, None);
    Ok(())
}

#[test]
fn test_unknown_category_names_index_and_field() {
    let mut payload = hotel_payload();
    payload["places"][0]["category"] = json!("SPA");

    let err = validate_places_response(&payload).unwrap_err();
    assert_eq!(err.field(), Some("places[0].category"));
    assert!(err.to_string().contains("SPA"));
}

#[test]
fn test_violation_reports_first_offending_element() {
    let payload = json!({
        "places": [
            {
                "name": "Hotel X",
                "address": "1 Main St",
                "category": "LODGING",
            },
            {
                "name": "Club Z",
                "address": "",
                "category": "NIGHTLIFE",
            },
        ]
    });

    let err = validate_places_response(&payload).unwrap_err();
    assert_eq!(err.field(), Some("places[1].address"));
}

#[test]
fn test_missing_places_field_is_rejected() {
    let err = validate_places_response(&json!({})).unwrap_err();
    assert_eq!(err.field(), Some("places"));

    let err = validate_places_response(&json!({ "places": "none" })).unwrap_err();
    assert_eq!(err.field(), Some("places"));
}

#[test]
fn test_website_must_be_http_url() {
    let mut payload = hotel_payload();
    payload["places"][0]["website"] = json!("not a url");

    let err = validate_places_response(&payload).unwrap_err();
    assert_eq!(err.field(), Some("places[0].website"));

    let mut payload = hotel_payload();
    payload["places"][0]["website"] = json!("https://hotel-x.example.com");
    assert!(validate_places_response(&payload).is_ok());
}

#[test]
fn test_presentation_order_is_preserved() -> Result<()> {
    let payload = json!({
        "places": [
            { "name": "Club Z", "address": "3 Night St", "category": "NIGHTLIFE" },
            { "name": "Hotel X", "address": "1 Main St", "category": "LODGING" },
            { "name": "Rent-a-Car", "address": "9 Airport Rd", "category": "CAR_RENTAL" },
        ]
    });

    let response = validate_places_response(&payload)?;
    let names: Vec<&str> = response.places.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Club Z", "Hotel X", "Rent-a-Car"]);

    let back: GetAllPlacesResponse = serde_json::from_value(serde_json::to_value(&response)?)?;
    assert_eq!(back, response);
    Ok(())
}

#[test]
fn test_absent_optionals_serialize_as_null() -> Result<()> {
    let place = PlaceData {
        name: "Hotel X".to_string(),
        address: "1 Main St".to_string(),
        cost: None,
        distance_from_venue: Some(2.5),
        distance_from_airport: None,
        website: None,
        phone_number: None,
        category: PlaceCategory::Lodging,
    };
    place.validate()?;

    let wire = serde_json::to_value(&place)?;
    assert_eq!(wire["cost"], json!(null));
    assert_eq!(wire["distanceFromAirport"], json!(null));
    assert_eq!(wire["website"], json!(null));
    assert_eq!(wire["phoneNumber"], json!(null));
    assert_eq!(wire["category"], json!("LODGING"));
    Ok(())
}
