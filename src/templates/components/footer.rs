use crate::domain::catalog::NAV_LINKS;
use maud::{html, Markup};

pub fn footer(year: i32) -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-brand" {
                a href="/" class="logo" { "Vistahaven" }
                p { "Luxury residences, eco green buildings and unique vacation homes." }
            }
            nav {
                ul {
                    @for (label, href) in NAV_LINKS {
                        li { a href=(href) { (label) } }
                    }
                }
            }
            p class="copyright" { "© " (year) " Vistahaven. All rights reserved." }
        }
    }
}
