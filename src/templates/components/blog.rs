use crate::domain::catalog::BLOG_POSTS;
use crate::templates::components::{media_placeholder, section_heading};
use maud::{html, Markup};

pub fn blog() -> Markup {
    html! {
        section id="blog" class="section blog" {
            (section_heading("Real Estate Insights", html! { "Latest From Our Blog" }))
            div class="blog-grid" {
                @for post in BLOG_POSTS {
                    article class="blog-card" {
                        (media_placeholder("blog-media", post.title))
                        time { (post.date) }
                        h3 { (post.title) }
                    }
                }
            }
        }
    }
}
