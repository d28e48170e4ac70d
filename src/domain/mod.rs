pub mod catalog;
pub mod contact;
pub mod filter;
pub mod listing;

pub use catalog::Icon;
pub use contact::{ContactError, ContactSubmission};
pub use filter::{FilterError, FilterSelection, ListingFilter, ListingsView};
pub use listing::{ListingStatus, PropertyListing, PropertyType};
