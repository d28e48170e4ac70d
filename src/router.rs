use crate::domain::catalog::featured_listings;
use crate::domain::{ContactSubmission, FilterSelection, ListingFilter};
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_response_with_status, json_response, stylesheet_response, ResultResp,
};
use crate::templates::{self, ContactFormState};
use astra::Request;
use chrono::Datelike;
use std::io::Read;
use url::form_urlencoded;

/// Largest contact-form body we read.
const MAX_FORM_BYTES: u64 = 64 * 1024;

const ROUTES: &[&str] = &["/", "/properties", "/api/listings", "/contact", "/static/main.css"];

/// Immutable state shared by every worker.
pub struct Site {
    filter: ListingFilter,
}

impl Site {
    pub fn new(filter: ListingFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(ListingFilter::new(featured_listings()))
    }
}

pub fn handle(mut req: Request, site: &Site) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let selection = selection(&req, site)?;
            let view = site.filter().view(selection);
            html_response(templates::pages::home_page(
                &view,
                &ContactFormState::Blank,
                current_year(),
            ))
        }
        ("GET", "/properties") => {
            let selection = selection(&req, site)?;
            html_response(templates::listings_section(&site.filter().view(selection)))
        }
        ("GET", "/api/listings") => {
            let selection = selection(&req, site)?;
            json_response(&site.filter().view(selection))
        }
        ("POST", "/contact") => contact(&mut req, site),
        ("GET", "/static/main.css") => stylesheet_response(),

        (_, p) if ROUTES.contains(&p) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn contact(req: &mut Request, site: &Site) -> ResultResp {
    let partial = is_htmx(req);

    // One byte past the limit tells an oversized body apart from a full one.
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::PayloadTooLarge);
    }

    let form = ContactSubmission::from_pairs(form_urlencoded::parse(&body));
    let (status, state) = match form.validate() {
        Ok(()) => {
            tracing::info!(
                name = %form.full_name(),
                email = %form.email,
                phone = %form.phone,
                message_len = form.message.len(),
                "contact form submitted"
            );
            (200, ContactFormState::Sent)
        }
        Err(err) => {
            tracing::warn!("contact form rejected: {err}");
            let error = err.to_string();
            (400, ContactFormState::Invalid { form, error })
        }
    };

    // htmx only swaps 2xx responses, so the re-rendered card goes out as 200.
    if partial {
        return html_response(templates::contact_card(&state));
    }

    let view = site.filter().view(FilterSelection::default());
    html_response_with_status(
        status,
        templates::pages::home_page(&view, &state, current_year()),
    )
}

fn selection(req: &Request, site: &Site) -> Result<FilterSelection, ServerError> {
    Ok(site.filter().selection_from_query(parse_query(req))?)
}

fn parse_query(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
