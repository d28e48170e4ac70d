// src/tests/router_tests/listings_tests.rs

use crate::tests::utils::get;
use pretty_assertions::assert_eq;

fn card_titles(body: &str) -> Vec<&str> {
    body.split(r#"class="property-body"><h3>"#)
        .skip(1)
        .filter_map(|rest| rest.split("</h3>").next())
        .collect()
}

#[test]
fn fragment_filters_by_status() {
    let (status, body) = get("/properties?status=For+Rent");
    assert_eq!(status, 200);
    assert!(!body.contains("<html"), "fragment should not include the layout");
    assert_eq!(
        card_titles(&body),
        vec!["Palazzo di Amore", "Downtown Penthouse"]
    );
}

#[test]
fn location_token_matches_every_listing_in_that_state() {
    let (_, body) = get("/properties?location=California");
    assert_eq!(card_titles(&body), vec!["The One Bel Air", "Seaside Retreat"]);
}

#[test]
fn home_page_applies_query_selection() {
    let (status, body) = get("/?type=Cabin");
    assert_eq!(status, 200);
    assert_eq!(card_titles(&body), vec!["Aspen Ski Lodge"]);
    assert!(body.contains(r#"<option value="Cabin" selected>Cabin</option>"#));
}

#[test]
fn all_is_the_same_as_no_filter() {
    let (_, filtered) = get("/properties?location=All&type=All&status=All");
    let (_, unfiltered) = get("/properties");
    assert_eq!(card_titles(&filtered), card_titles(&unfiltered));
    assert_eq!(card_titles(&unfiltered).len(), 6);
}

#[test]
fn zero_matches_show_empty_state() {
    let (status, body) = get("/properties?location=Texas&status=For+Rent");
    assert_eq!(status, 200);
    assert!(card_titles(&body).is_empty());
    assert!(body.contains("No properties found"));
    assert!(body.contains("Clear all filters"));
}

#[test]
fn unknown_filter_value_is_rejected() {
    let (status, body) = get("/properties?location=Ohio");
    assert_eq!(status, 400);
    assert!(body.contains("unknown location: Ohio"));

    let (status, _) = get("/?type=Castle");
    assert_eq!(status, 400);
}

#[test]
fn api_returns_selection_options_and_listings() {
    let (status, body) = get("/api/listings?location=New%20York");
    assert_eq!(status, 200);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["selection"]["location"], "New York");
    assert_eq!(json["selection"]["status"], "All");
    assert_eq!(json["count"], 2);
    assert_eq!(json["listings"][0]["title"], "Palazzo di Amore");
    assert_eq!(json["listings"][0]["price"]["kind"], "monthly_rent");
    assert_eq!(json["locations"][0], "All");
    assert_eq!(
        json["types"],
        serde_json::json!(["All", "Mansion", "Villa", "Modern", "Apartment", "Cabin"])
    );
}
