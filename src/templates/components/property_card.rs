use crate::domain::{Icon, PropertyListing};
use crate::templates::components::icon::sized_icon;
use crate::templates::components::media_placeholder;
use maud::{html, Markup};

pub fn property_card(p: &PropertyListing) -> Markup {
    html! {
        article class="property-card" data-id=(p.id) {
            div class="property-media" {
                (media_placeholder("property-photo", p.title))
                span class="badge" { (p.status.as_str()) }
                p class="price" { (p.price.to_string()) }
            }
            div class="property-body" {
                h3 { (p.title) }
                p class="location" {
                    (sized_icon(Icon::MapPin, 14))
                    span { (p.location) }
                }
                ul class="specs" {
                    li title=(format!("{} Bedrooms", p.beds)) { (sized_icon(Icon::Bed, 16)) (p.beds) }
                    li title=(format!("{} Bathrooms", p.baths)) { (sized_icon(Icon::Bath, 16)) (p.baths) }
                    li title=(format!("{} Square Feet", p.sqft_display())) {
                        (sized_icon(Icon::Move, 16)) (p.sqft_display())
                    }
                }
            }
        }
    }
}
