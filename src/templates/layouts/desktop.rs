use crate::domain::catalog::NAV_LINKS;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Vistahaven: luxury residences, eco green buildings and unique vacation homes.";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header class="site-header" {
                    a href="/" class="logo" { "Vistahaven" }
                    nav {
                        ul {
                            @for (label, href) in NAV_LINKS {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }
                    a href="#contact" class="btn primary" { "Contact Us Now" }
                }
                (content)
            }
        }
    }
}
