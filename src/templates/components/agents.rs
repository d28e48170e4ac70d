use crate::domain::catalog::AGENTS;
use crate::templates::components::{media_placeholder, section_heading};
use maud::{html, Markup};

pub fn agents() -> Markup {
    html! {
        section id="agents" class="section agents" {
            (section_heading(
                "Meet Our Experts",
                html! { "Personalized Guidance, " br; span class="muted" { "Proven Expertise" } },
            ))
            ul class="agent-strip" {
                @for agent in AGENTS {
                    li class="agent" {
                        (media_placeholder("agent-photo", agent.name))
                        strong { (agent.name) }
                        span { (agent.role) }
                    }
                }
            }
        }
    }
}
