// src/domain/filter.rs

use crate::domain::listing::{ListingStatus, PropertyListing, PropertyType};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Label used for the "no constraint" entry of every filter control.
pub const ALL: &str = "All";

/// A single filter control value: either unconstrained or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T> Choice<T> {
    /// `All` admits everything; `Only(v)` defers to the predicate.
    pub fn admits(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(v) => pred(v),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str(ALL),
            Choice::Only(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl<T: fmt::Display> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterSelection {
    pub location: Choice<&'static str>,
    #[serde(rename = "type")]
    pub property_type: Choice<PropertyType>,
    pub status: Choice<ListingStatus>,
}

/// A user-initiated change to the selection, as forwarded by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    SetLocation(String),
    SetType(String),
    SetStatus(String),
    ClearAll,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown location: {0}")]
    UnknownLocation(String),
    #[error("unknown property type: {0}")]
    UnknownType(String),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
}

/// Trailing part of a location after the last comma, trimmed.
/// Falls back to the untouched field when the tail is blank.
pub fn location_token(location: &str) -> &str {
    let tail = location.rsplit(',').next().unwrap_or(location).trim();
    if tail.is_empty() {
        location
    } else {
        tail
    }
}

pub fn derive_location_options(listings: &[PropertyListing]) -> Vec<Choice<&'static str>> {
    let mut options = vec![Choice::All];
    for listing in listings {
        let token = Choice::Only(location_token(listing.location));
        if !options.contains(&token) {
            options.push(token);
        }
    }
    options
}

pub fn derive_type_options(listings: &[PropertyListing]) -> Vec<Choice<PropertyType>> {
    let mut options = vec![Choice::All];
    for listing in listings {
        let ty = Choice::Only(listing.property_type);
        if !options.contains(&ty) {
            options.push(ty);
        }
    }
    options
}

pub fn status_options() -> [Choice<ListingStatus>; 3] {
    [
        Choice::All,
        Choice::Only(ListingStatus::ForSale),
        Choice::Only(ListingStatus::ForRent),
    ]
}

/// Stable, conjunctive filter. The result borrows from `listings` in their
/// original order; location matches by substring containment.
pub fn apply_filter<'a>(
    listings: &'a [PropertyListing],
    selection: &FilterSelection,
) -> Vec<&'a PropertyListing> {
    listings
        .iter()
        .filter(|l| selection.location.admits(|loc| l.location.contains(loc)))
        .filter(|l| selection.property_type.admits(|ty| l.property_type == *ty))
        .filter(|l| selection.status.admits(|st| l.status == *st))
        .collect()
}

pub fn clear_filters() -> FilterSelection {
    FilterSelection::default()
}

/// The listing collection together with the option lists derived from it.
/// Selections built through this type only ever hold offered values.
#[derive(Debug, Clone)]
pub struct ListingFilter {
    listings: Vec<PropertyListing>,
    locations: Vec<Choice<&'static str>>,
    types: Vec<Choice<PropertyType>>,
}

impl ListingFilter {
    pub fn new(listings: Vec<PropertyListing>) -> Self {
        let locations = derive_location_options(&listings);
        let types = derive_type_options(&listings);
        Self {
            listings,
            locations,
            types,
        }
    }

    pub fn listings(&self) -> &[PropertyListing] {
        &self.listings
    }

    pub fn location_options(&self) -> &[Choice<&'static str>] {
        &self.locations
    }

    pub fn type_options(&self) -> &[Choice<PropertyType>] {
        &self.types
    }

    pub fn apply(
        &self,
        selection: FilterSelection,
        event: FilterEvent,
    ) -> Result<FilterSelection, FilterError> {
        match event {
            FilterEvent::SetLocation(value) => {
                let location = pick(&self.locations, &value)
                    .ok_or(FilterError::UnknownLocation(value))?;
                Ok(FilterSelection {
                    location,
                    ..selection
                })
            }
            FilterEvent::SetType(value) => {
                let property_type =
                    pick(&self.types, &value).ok_or(FilterError::UnknownType(value))?;
                Ok(FilterSelection {
                    property_type,
                    ..selection
                })
            }
            FilterEvent::SetStatus(value) => {
                let status =
                    pick(&status_options(), &value).ok_or(FilterError::UnknownStatus(value))?;
                Ok(FilterSelection {
                    status,
                    ..selection
                })
            }
            FilterEvent::ClearAll => Ok(clear_filters()),
        }
    }

    /// Folds `location`, `type` and `status` query pairs into a selection,
    /// starting from the cleared state. Blank values and other keys are ignored.
    pub fn selection_from_query<I, K, V>(&self, pairs: I) -> Result<FilterSelection, FilterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut selection = clear_filters();

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }

            let event = match key.as_ref() {
                "location" => FilterEvent::SetLocation(value.to_string()),
                "type" => FilterEvent::SetType(value.to_string()),
                "status" => FilterEvent::SetStatus(value.to_string()),
                _ => continue,
            };
            selection = self.apply(selection, event)?;
        }

        Ok(selection)
    }

    pub fn view(&self, selection: FilterSelection) -> ListingsView<'_> {
        let listings = apply_filter(&self.listings, &selection);
        ListingsView {
            selection,
            count: listings.len(),
            listings,
            locations: &self.locations,
            types: &self.types,
            statuses: status_options(),
        }
    }
}

/// Resolve a submitted label against an option list.
fn pick<T: Copy + fmt::Display>(options: &[Choice<T>], label: &str) -> Option<Choice<T>> {
    options.iter().copied().find(|opt| opt.to_string() == label)
}

/// Everything the page needs to render the listings section.
#[derive(Debug, Serialize)]
pub struct ListingsView<'a> {
    pub selection: FilterSelection,
    pub count: usize,
    pub listings: Vec<&'a PropertyListing>,
    pub locations: &'a [Choice<&'static str>],
    pub types: &'a [Choice<PropertyType>],
    pub statuses: [Choice<ListingStatus>; 3],
}

impl ListingsView<'_> {
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn is_filtered(&self) -> bool {
        let sel = &self.selection;
        !(sel.location.is_all() && sel.property_type.is_all() && sel.status.is_all())
    }
}
