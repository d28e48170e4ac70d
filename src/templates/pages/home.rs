// templates/pages/home.rs

use crate::domain::ListingsView;
use crate::templates::components::{
    agents::agents, blog::blog, contact_section, faq::faq, feature_tabs::feature_tabs,
    footer::footer, hero::hero, listings_section, services::services,
    testimonials::testimonials, vision::vision_stats, ContactFormState,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page(view: &ListingsView, contact: &ContactFormState, year: i32) -> Markup {
    desktop_layout(
        "Vistahaven | Find Your Perfect Home",
        html! {
            main {
                (hero())
                (feature_tabs())
                (services())
                (listings_section(view))
                (vision_stats())
                (agents())
                (testimonials())
                (blog())
                (faq())
                (contact_section(contact))
            }
            (footer(year))
        },
    )
}
