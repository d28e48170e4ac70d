use crate::router::{handle, Site};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Build a request the way astra hands it to the router.
pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_post(uri: &str, body: &str, htmx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Run a request through the router, rendering errors like the server does.
pub fn send(req: Request<Body>) -> Response {
    let site = Site::default();
    match handle(req, &site) {
        Ok(resp) => resp,
        Err(err) => crate::responses::html_error_response(err),
    }
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

pub fn get(uri: &str) -> (u16, String) {
    let mut resp = send(request(Method::GET, uri));
    let body = body_string(&mut resp);
    (resp.status().as_u16(), body)
}
