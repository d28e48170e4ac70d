// src/tests/router_tests/page_tests.rs

use crate::tests::utils::{body_string, get, request, send};
use http::Method;

#[test]
fn home_renders_every_section() {
    let (status, body) = get("/");
    assert_eq!(status, 200);

    for marker in [
        "Perfect Home",
        "Comprehensive ",
        "Property Sales",
        "Featured Properties",
        "Client Retention",
        "Meet Our Experts",
        "Olivia Wilson",
        "Real Estate Insights",
        "What Is The Process For Buying A Property?",
        "Send Message",
        "Vistahaven. All rights reserved.",
    ] {
        assert!(body.contains(marker), "home page missing {marker:?}");
    }
}

#[test]
fn home_lists_all_six_properties_by_default() {
    let (_, body) = get("/");
    assert_eq!(body.matches(r#"class="property-card""#).count(), 6);
}

#[test]
fn home_references_no_missing_images() {
    let (_, body) = get("/");
    assert!(!body.contains("<img"));
    assert!(!body.contains("/static/img/"));
    assert!(body.contains(r#"role="img" aria-label="Modern Luxury Home""#));
}

#[test]
fn first_faq_starts_open() {
    let (_, body) = get("/");
    assert_eq!(body.matches("<details name=\"faq\" open>").count(), 1);
}

#[test]
fn stylesheet_is_served_as_css() {
    let mut resp = send(request(Method::GET, "/static/main.css"));
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(&mut resp).contains(".property-grid"));
}

#[test]
fn unknown_path_is_404() {
    let (status, body) = get("/nowhere");
    assert_eq!(status, 404);
    assert!(body.contains("Error 404"));
}

#[test]
fn wrong_method_is_405() {
    let resp = send(request(Method::DELETE, "/"));
    assert_eq!(resp.status(), 405);

    let resp = send(request(Method::GET, "/contact"));
    assert_eq!(resp.status(), 405);
}
