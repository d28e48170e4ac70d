pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{contact_card, error_page, listings_section, ContactFormState};
pub use layouts::desktop::desktop_layout;
