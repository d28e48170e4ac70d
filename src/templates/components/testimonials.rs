use crate::domain::catalog::{testimonial_columns, TESTIMONIALS};
use crate::domain::Icon;
use crate::templates::components::icon::sized_icon;
use crate::templates::components::section_heading;
use maud::{html, Markup};

pub fn testimonials() -> Markup {
    html! {
        section class="section testimonials" {
            (section_heading(
                "Client Stories",
                html! { "What Our Clients Say " span class="muted" { "Loved by All" } },
            ))
            div class="testimonial-columns" {
                @for column in testimonial_columns() {
                    div class="testimonial-column" {
                        @for t in column {
                            blockquote class="testimonial" {
                                p { (t.content) }
                                footer {
                                    strong { (t.name) }
                                    span { (t.role) }
                                }
                            }
                        }
                    }
                }
            }
            p class="rating-summary" {
                (sized_icon(Icon::Star, 16))
                strong { "4.9/5 Rating" }
                span { " Based on 2,450 reviews from " (TESTIMONIALS.len()) "+ featured clients" }
            }
        }
    }
}
