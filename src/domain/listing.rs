// src/domain/listing.rs

use serde::Serialize;
use std::fmt;

/// A featured property as shown on the landing page.
/// Listings are static data and never change while the process runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyListing {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str, // "Neighbourhood, City, State"
    pub price: Price,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: ListingStatus,

    pub beds: u8,
    pub baths: u8,
    pub sqft: u32,

    pub image: &'static str,
}

impl PropertyListing {
    pub fn sqft_display(&self) -> String {
        group_thousands(u64::from(self.sqft))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Price {
    /// Asking price in whole dollars.
    Sale(u64),
    /// Rent in whole dollars per month.
    MonthlyRent(u64),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Sale(amount) => write!(f, "${}", group_thousands(*amount)),
            Price::MonthlyRent(amount) => write!(f, "${}/mo", group_thousands(*amount)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PropertyType {
    Mansion,
    Villa,
    Modern,
    Apartment,
    Cabin,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Mansion => "Mansion",
            PropertyType::Villa => "Villa",
            PropertyType::Modern => "Modern",
            PropertyType::Apartment => "Apartment",
            PropertyType::Cabin => "Cabin",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListingStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
}

impl ListingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::ForRent => "For Rent",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 5500000 -> "5,500,000"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
