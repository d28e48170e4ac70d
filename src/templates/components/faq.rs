use crate::domain::catalog::{FAQS, FAQ_OPEN_BY_DEFAULT};
use crate::templates::components::section_heading;
use maud::{html, Markup};

/// Accordion built on `<details>`; the browser keeps the open/closed state.
pub fn faq() -> Markup {
    html! {
        section id="faq" class="section faq" {
            (section_heading("Help Center", html! { "Frequently Asked Questions" }))
            p class="lead" {
                "Can't find the answer you're looking for? Contact our support team directly."
            }
            div class="accordion" {
                @for item in FAQS {
                    details name="faq" open[item.id == FAQ_OPEN_BY_DEFAULT] {
                        summary { (item.question) }
                        p { (item.answer) }
                    }
                }
            }
        }
    }
}
