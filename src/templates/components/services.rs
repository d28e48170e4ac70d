use crate::domain::catalog::SERVICES;
use crate::templates::components::icon::icon;
use crate::templates::components::section_heading;
use maud::{html, Markup};

pub fn services() -> Markup {
    html! {
        section id="services" class="section services" {
            (section_heading(
                "Why Choose Us",
                html! { "Expert Services " span class="muted" { "Tailored to You" } },
            ))
            p class="lead" {
                "From property sales to investment consulting, we provide comprehensive "
                "solutions tailored to your unique goals."
            }
            div class="service-grid" {
                @for service in SERVICES {
                    article class="service-card" {
                        div class="service-icon" { (icon(service.icon)) }
                        h3 { (service.title) }
                        p { (service.description) }
                    }
                }
            }
        }
    }
}
