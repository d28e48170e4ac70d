use crate::domain::catalog::HERO_STATS;
use crate::domain::Icon;
use crate::templates::components::icon::sized_icon;
use crate::templates::components::media_placeholder;
use maud::{html, Markup};

pub fn hero() -> Markup {
    html! {
        section id="home" class="hero" {
            (media_placeholder("hero-bg", "Modern Luxury Home"))
            div class="hero-content" {
                span class="eyebrow live" { "New Listings Live" }
                h1 { "Find Your " br; span class="muted" { "Perfect Home" } }
                p {
                    "We provide tailored real estate solutions, guiding you through every step "
                    "with personalized experiences that meet your unique needs."
                }
                a class="pill-button" href="#properties" {
                    span { "Explore Properties" }
                    (sized_icon(Icon::ArrowUpRight, 20))
                }
                dl class="hero-stats" {
                    @for stat in HERO_STATS {
                        div {
                            dt { (stat.number) }
                            dd { (stat.text) }
                        }
                    }
                }
            }
            aside class="hero-agents" {
                p { strong { "10+ Featured Agents" } }
                span class="rating" { (sized_icon(Icon::Star, 14)) "4.8/5.0" }
            }
        }
    }
}
