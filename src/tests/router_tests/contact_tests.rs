// src/tests/router_tests/contact_tests.rs

use crate::tests::utils::{body_string, form_post, send};

const VALID: &str =
    "firstName=Ada&lastName=Lovelace&email=ada%40example.com&phone=&message=Tell+me+about+Malibu";

#[test]
fn htmx_submission_returns_confirmation_fragment() {
    let mut resp = send(form_post("/contact", VALID, true));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Message Sent!"));
    assert!(!body.contains("<html"));
}

#[test]
fn plain_submission_renders_full_page() {
    let mut resp = send(form_post("/contact", VALID, false));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("<html"));
    assert!(body.contains("Message Sent!"));
    assert!(body.contains("Featured Properties"));
}

#[test]
fn invalid_submission_keeps_input() {
    // Swapped in place by htmx, which ignores error statuses.
    let mut resp = send(form_post(
        "/contact",
        "firstName=Ada&email=not-an-email&message=Hi",
        true,
    ));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("please enter a valid email address"));
    assert!(body.contains(r#"value="not-an-email""#));
    assert!(body.contains(r#"value="Ada""#));
}

#[test]
fn empty_submission_is_rejected() {
    let resp = send(form_post("/contact", "", false));
    assert_eq!(resp.status(), 400);
}

#[test]
fn plain_invalid_submission_is_400_with_full_page() {
    let mut resp = send(form_post(
        "/contact",
        "firstName=Ada&email=not-an-email&message=Hi",
        false,
    ));
    assert_eq!(resp.status(), 400);

    let body = body_string(&mut resp);
    assert!(body.contains("<html"));
    assert!(body.contains("please enter a valid email address"));
    assert!(body.contains(r#"value="Ada""#));
}

#[test]
fn oversized_body_is_rejected_not_truncated() {
    let body = format!(
        "firstName=Ada&email=a%40b.c&pad={}&message={}",
        "x".repeat(63_000),
        "m".repeat(4_000)
    );
    let mut resp = send(form_post("/contact", &body, true));
    assert_eq!(resp.status(), 413);

    let body = body_string(&mut resp);
    assert!(body.contains("Payload Too Large"));
    assert!(!body.contains("Message Sent!"));
}

#[test]
fn body_at_the_limit_is_read_whole() {
    let prefix = "firstName=Ada&email=a%40b.c&message=Hi&pad=";
    let body = format!("{prefix}{}", "x".repeat(64 * 1024 - prefix.len()));
    let mut resp = send(form_post("/contact", &body, true));
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Message Sent!"));
}
