use maud::{html, Markup};

pub mod agents;
pub mod blog;
pub mod contact_form;
pub mod error;
pub mod faq;
pub mod feature_tabs;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod listings;
pub mod property_card;
pub mod services;
pub mod testimonials;
pub mod vision;

pub use contact_form::{contact_card, contact_section, ContactFormState};
pub use error::error_page;
pub use listings::listings_section;

/// Stand-in for a photo; the site ships no image assets.
pub fn media_placeholder(class: &str, label: &str) -> Markup {
    html! {
        div class={ "media-placeholder " (class) } role="img" aria-label=(label) {}
    }
}

/// Eyebrow pill plus a section title.
pub fn section_heading(eyebrow: &str, title: Markup) -> Markup {
    html! {
        div class="section-heading" {
            span class="eyebrow" { (eyebrow) }
            h2 { (title) }
        }
    }
}
