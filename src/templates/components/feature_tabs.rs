use crate::domain::catalog::FEATURE_TABS;
use crate::templates::components::{media_placeholder, section_heading};
use maud::{html, Markup};

/// Tabs without script: each panel is an anchor target, the first one is
/// shown until another is picked.
pub fn feature_tabs() -> Markup {
    html! {
        section id="about" class="section feature-tabs" {
            (section_heading(
                "Our Expertise",
                html! { "Comprehensive " br; "Real Estate Solutions" },
            ))
            nav class="tab-list" {
                @for (i, tab) in FEATURE_TABS.iter().enumerate() {
                    a href={ "#feature-" (i) } { (tab.title) }
                }
            }
            div class="tab-panels" {
                @for (i, tab) in FEATURE_TABS.iter().enumerate() {
                    article id={ "feature-" (i) } class="tab-panel" {
                        (media_placeholder("tab-media", tab.title))
                        div {
                            span class="eyebrow" { (tab.subtitle) }
                            h3 { (tab.title) }
                            p { (tab.description) }
                        }
                    }
                }
            }
        }
    }
}
