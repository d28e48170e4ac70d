use crate::domain::catalog::{STATS, VISION_FEATURES};
use crate::templates::components::icon::icon;
use crate::templates::components::section_heading;
use maud::{html, Markup};

pub fn vision_stats() -> Markup {
    html! {
        section class="section vision" {
            (section_heading("Who We Are", html! { "Exceptional Living Spaces" }))
            p class="lead" {
                "Founded with a passion for exceptional living spaces, we are committed to "
                "quality, innovation, and client satisfaction."
            }
            dl class="stats" {
                @for stat in STATS {
                    div class="stat" {
                        dt { (stat.prefix) (stat.value) (stat.suffix) }
                        dd { (stat.label) }
                    }
                }
            }
            div class="vision-features" {
                @for feature in VISION_FEATURES {
                    article {
                        (icon(feature.icon))
                        h3 { (feature.title) }
                        p { (feature.description) }
                    }
                }
            }
        }
    }
}
