use crate::domain::{ContactSubmission, Icon};
use crate::templates::components::icon::sized_icon;
use crate::templates::components::section_heading;
use maud::{html, Markup};

/// What the contact card shows for the current request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactFormState {
    #[default]
    Blank,
    /// Re-rendered with the submitted values and the first problem found.
    Invalid {
        form: ContactSubmission,
        error: String,
    },
    Sent,
}

pub fn contact_section(state: &ContactFormState) -> Markup {
    html! {
        section id="contact" class="section contact" {
            div class="contact-intro" {
                (section_heading(
                    "Get In Touch",
                    html! { "Let's Make Your Property " br; "Journey Effortless" },
                ))
                p class="lead" {
                    "Have questions or ready to take the next step? Whether you're looking to "
                    "buy, rent, or invest, our team is here to guide you."
                }
            }
            (contact_card(state))
        }
    }
}

/// The swappable part of the contact section (htmx target).
pub fn contact_card(state: &ContactFormState) -> Markup {
    let blank = ContactSubmission::default();
    let (form, error) = match state {
        ContactFormState::Sent => return sent_card(),
        ContactFormState::Blank => (&blank, None),
        ContactFormState::Invalid { form, error } => (form, Some(error.as_str())),
    };

    html! {
        div id="contact-card" class="contact-card" {
            form
                method="post"
                action="/contact"
                hx-post="/contact"
                hx-target="#contact-card"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
            {
                @if let Some(error) = error {
                    p class="form-error" role="alert" { (error) }
                }
                div class="field-row" {
                    (field("firstName", "First Name", "text", &form.first_name, true))
                    (field("lastName", "Last Name", "text", &form.last_name, false))
                }
                div class="field-row" {
                    (field("email", "Email Address", "email", &form.email, true))
                    (field("phone", "Phone Number", "tel", &form.phone, false))
                }
                div class="field" {
                    label for="message" { "What can we help you with?" }
                    textarea id="message" name="message" rows="4" required { (form.message) }
                }
                button type="submit" class="btn primary" {
                    span { "Send Message" }
                    (sized_icon(Icon::ArrowUpRight, 18))
                }
            }
        }
    }
}

fn field(name: &str, label: &str, kind: &str, value: &str, required: bool) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type=(kind) id=(name) name=(name) value=(value) required[required];
        }
    }
}

fn sent_card() -> Markup {
    html! {
        div id="contact-card" class="contact-card sent" role="status" {
            div class="sent-icon" { (sized_icon(Icon::Check, 32)) }
            h3 { "Message Sent!" }
            p { "We'll be in touch shortly." }
            a href="/#contact" { "Send another message" }
        }
    }
}
