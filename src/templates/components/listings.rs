use crate::domain::filter::{Choice, FilterSelection};
use crate::domain::{Icon, ListingsView};
use crate::templates::components::icon::sized_icon;
use crate::templates::components::property_card::property_card;
use crate::templates::components::section_heading;
use maud::{html, Markup};
use std::fmt::Display;
use url::form_urlencoded;

pub const SECTION_ID: &str = "properties";

/// Query string for a selection; unconstrained fields are left out.
pub fn selection_query(sel: &FilterSelection) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Choice::Only(location) = sel.location {
        query.append_pair("location", location);
    }
    if let Choice::Only(ty) = sel.property_type {
        query.append_pair("type", ty.as_str());
    }
    if let Choice::Only(status) = sel.status {
        query.append_pair("status", status.as_str());
    }
    query.finish()
}

/// Full-page link, used without JavaScript.
pub fn page_href(sel: &FilterSelection) -> String {
    match selection_query(sel) {
        q if q.is_empty() => format!("/#{SECTION_ID}"),
        q => format!("/?{q}#{SECTION_ID}"),
    }
}

/// Fragment link, used by htmx to swap just this section.
pub fn fragment_href(sel: &FilterSelection) -> String {
    match selection_query(sel) {
        q if q.is_empty() => "/properties".to_string(),
        q => format!("/properties?{q}"),
    }
}

pub fn listings_section(view: &ListingsView) -> Markup {
    let sel = view.selection;

    html! {
        section id=(SECTION_ID) class="section properties" {
            div class="properties-head" {
                (section_heading(
                    "Featured Properties",
                    html! { "Discover Homes Tailored " br; "to Your Lifestyle." },
                ))

                nav class="status-toggle" aria-label="Listing status" {
                    @for status in view.statuses {
                        @let next = FilterSelection { status, ..sel };
                        a
                            href=(page_href(&next))
                            hx-get=(fragment_href(&next))
                            hx-target={"#" (SECTION_ID)}
                            hx-swap="outerHTML"
                            class=[(status == sel.status).then_some("active")]
                        { (status.to_string()) }
                    }
                }
            }

            form
                class="filter-bar"
                method="get"
                action="/"
                hx-get="/properties"
                hx-target={"#" (SECTION_ID)}
                hx-swap="outerHTML"
                hx-trigger="change"
            {
                input type="hidden" name="status" value=(sel.status.to_string());
                (dropdown("location", "Location", sel.location, view.locations))
                (dropdown("type", "Property Type", sel.property_type, view.types))
                noscript { button type="submit" class="btn" { "Apply" } }
                @if view.is_filtered() {
                    (clear_link("Reset filters"))
                }
            }

            div class="property-grid" {
                @if view.is_empty() {
                    (empty_state())
                } @else {
                    @for listing in &view.listings {
                        (property_card(listing))
                    }
                }
            }

            @if !view.is_empty() {
                div class="view-all" {
                    a class="pill-button" href={"#" (SECTION_ID)} {
                        span { "View All Properties" }
                        (sized_icon(Icon::ArrowUpRight, 20))
                    }
                }
            }
        }
    }
}

fn dropdown<T: Display + PartialEq + Copy>(
    name: &str,
    label: &str,
    current: Choice<T>,
    options: &[Choice<T>],
) -> Markup {
    let id = format!("filter-{name}");
    html! {
        div class="dropdown" {
            label for=(id) { (label) }
            select id=(id) name=(name) {
                @for opt in options {
                    option value=(opt.to_string()) selected[*opt == current] { (opt.to_string()) }
                }
            }
        }
    }
}

/// Shown when no listing satisfies the selection, with a one-click reset.
fn empty_state() -> Markup {
    html! {
        div class="empty-state" {
            (sized_icon(Icon::Move, 32))
            h3 { "No properties found" }
            p { "We couldn't find any properties matching your current filters." }
            (clear_link("Clear all filters"))
        }
    }
}

/// One-click return to the unfiltered view.
fn clear_link(label: &str) -> Markup {
    let cleared = FilterSelection::default();
    html! {
        a
            class="clear-filters"
            href=(page_href(&cleared))
            hx-get=(fragment_href(&cleared))
            hx-target={"#" (SECTION_ID)}
            hx-swap="outerHTML"
        { (label) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::featured_listings;
    use crate::domain::filter::clear_filters;
    use crate::domain::{ListingFilter, ListingStatus, PropertyType};

    #[test]
    fn hrefs_omit_unconstrained_fields() {
        assert_eq!(page_href(&clear_filters()), "/#properties");
        assert_eq!(fragment_href(&clear_filters()), "/properties");

        let sel = FilterSelection {
            location: Choice::Only("New York"),
            property_type: Choice::All,
            status: Choice::Only(ListingStatus::ForRent),
        };
        assert_eq!(
            page_href(&sel),
            "/?location=New+York&status=For+Rent#properties"
        );
    }

    #[test]
    fn renders_cards_in_order() {
        let filter = ListingFilter::new(featured_listings());
        let html = listings_section(&filter.view(clear_filters())).into_string();

        let first = html.find("Billionaire Mansion").unwrap();
        let last = html.find("Aspen Ski Lodge").unwrap();
        assert!(first < last);
        assert!(!html.contains("No properties found"));
        assert!(html.contains("View All Properties"));
    }

    #[test]
    fn renders_empty_state_with_reset() {
        let filter = ListingFilter::new(featured_listings());
        let sel = FilterSelection {
            property_type: Choice::Only(PropertyType::Cabin),
            status: Choice::Only(ListingStatus::ForRent),
            ..clear_filters()
        };
        let html = listings_section(&filter.view(sel)).into_string();

        assert!(html.contains("No properties found"));
        assert!(html.contains("Clear all filters"));
        assert!(html.contains(r#"hx-get="/properties""#));
        assert!(!html.contains("View All Properties"));
    }

    #[test]
    fn marks_current_options_selected() {
        let filter = ListingFilter::new(featured_listings());
        let sel = FilterSelection {
            property_type: Choice::Only(PropertyType::Villa),
            ..clear_filters()
        };
        let html = listings_section(&filter.view(sel)).into_string();
        assert!(html.contains(r#"<option value="Villa" selected>Villa</option>"#));
    }
}
