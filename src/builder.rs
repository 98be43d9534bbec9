// Customization builder
// Turns a catalog category plus caller-chosen extras into a priced accommodation

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{AccommodationCategory, CategoryCatalog};
use crate::error::Result;

pub const EXTRA_BED_SURCHARGE: f64 = 30.0;
pub const PREMIUM_AMENITY_SURCHARGE: f64 = 25.0;

// Extras layered on top of a category. `None` means the caller never set the field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customizations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_beds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<Vec<String>>,
}

impl Customizations {
    pub fn extra_beds(&self) -> u32 {
        self.extra_beds.unwrap_or(0)
    }

    pub fn premium_amenities(&self) -> &[String] {
        self.premium_amenities.as_deref().unwrap_or(&[])
    }

    pub fn special_requests(&self) -> &[String] {
        self.special_requests.as_deref().unwrap_or(&[])
    }
}

/// Per-night price: base price plus a flat surcharge per extra bed and per
/// premium amenity. Special requests are free. Duplicate amenities are charged
/// once per occurrence.
pub fn nightly_price(category: &AccommodationCategory, customizations: &Customizations) -> f64 {
    category.base_price
        + customizations.extra_beds() as f64 * EXTRA_BED_SURCHARGE
        + customizations.premium_amenities().len() as f64 * PREMIUM_AMENITY_SURCHARGE
}

/// Number of nights between two dates, as the absolute day difference.
///
/// An inverted range counts the same as the forward one and a same-day stay is
/// zero nights; neither is rejected here.
pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    // Whole-day dates, so the ceiling of the day difference is the difference itself
    (check_out - check_in).num_days().abs()
}

pub fn stay_price(nightly_price: f64, nights: i64) -> f64 {
    nightly_price * nights as f64
}

// Frozen output of the builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationQuote {
    pub category: AccommodationCategory,
    pub customizations: Customizations,
}

impl AccommodationQuote {
    pub fn nightly_price(&self) -> f64 {
        nightly_price(&self.category, &self.customizations)
    }
}

/// Fluent, value-returning builder seeded from a catalog category.
///
/// The builder holds its own copy of the category, so quotes it hands out are
/// unaffected by anything that happens to the catalog or the builder later.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationBuilder {
    category: AccommodationCategory,
    customizations: Customizations,
}

impl CustomizationBuilder {
    pub fn create(catalog: &CategoryCatalog, category_id: &str) -> Result<Self> {
        let category = catalog.lookup(category_id)?.clone();
        debug!(category_id, "customization builder created");
        Ok(Self {
            category,
            customizations: Customizations::default(),
        })
    }

    // Replaces any previous count
    pub fn with_extra_beds(mut self, count: u32) -> Self {
        self.customizations.extra_beds = Some(count);
        self
    }

    pub fn with_premium_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.customizations.premium_amenities =
            Some(amenities.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_special_requests<I, S>(mut self, requests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.customizations.special_requests =
            Some(requests.into_iter().map(Into::into).collect());
        self
    }

    pub fn category(&self) -> &AccommodationCategory {
        &self.category
    }

    pub fn customizations(&self) -> &Customizations {
        &self.customizations
    }

    pub fn nightly_price(&self) -> f64 {
        nightly_price(&self.category, &self.customizations)
    }

    pub fn finalize(&self) -> AccommodationQuote {
        AccommodationQuote {
            category: self.category.clone(),
            customizations: self.customizations.clone(),
        }
    }
}

// A quote that has been committed to a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAccommodation {
    pub id: String,
    pub name: String,
    pub category: AccommodationCategory,
    pub customizations: Customizations,
    // Nightly price at the time of booking
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl CustomAccommodation {
    pub fn from_quote(id: String, quote: AccommodationQuote, created_at: DateTime<Utc>) -> Self {
        let total_price = quote.nightly_price();
        Self {
            id,
            name: format!("{} - Personalizada", quote.category.name),
            category: quote.category,
            customizations: quote.customizations,
            total_price,
            created_at,
        }
    }

    pub fn category_id(&self) -> &str {
        &self.category.id
    }
}
