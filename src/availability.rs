// Availability calculator
// Projects the booking store onto the category inventory for a given day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{AccommodationCategory, CategoryCatalog};
use crate::models::Booking;
use crate::store::BookingStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Occupancy {
    pub occupied: u32,
    pub total: u32,
    // Goes negative when a category is overbooked
    pub available: i64,
}

impl Occupancy {
    fn new(occupied: u32, total: u32) -> Self {
        Self {
            occupied,
            total,
            available: total as i64 - occupied as i64,
        }
    }

    pub fn is_overbooked(&self) -> bool {
        self.available < 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAvailability {
    pub category_id: String,
    pub category: AccommodationCategory,
    pub occupied: u32,
    pub total: u32,
    pub available: i64,
}

/// Read-only view over a catalog and a booking store.
///
/// Nothing is cached: every call walks the current bookings, so a calculator
/// built over a store always reflects it as it is at call time.
///
/// A booking holds a unit of a category on `date` when its status is active,
/// `check_in <= date < check_out`, and its embedded accommodation snapshot has
/// that category id. Bookings made without a custom accommodation hold no
/// category unit at all.
pub struct AvailabilityCalculator<'a> {
    catalog: &'a CategoryCatalog,
    store: &'a BookingStore,
}

fn holds_unit(booking: &Booking, category_id: &str, date: NaiveDate) -> bool {
    booking.status.is_active() && booking.covers(date) && booking.category_id() == Some(category_id)
}

impl<'a> AvailabilityCalculator<'a> {
    pub fn new(catalog: &'a CategoryCatalog, store: &'a BookingStore) -> Self {
        Self { catalog, store }
    }

    // Unknown categories report zero units
    pub fn occupancy_of(&self, category_id: &str, as_of: NaiveDate) -> Occupancy {
        let Some(category) = self.catalog.get(category_id) else {
            debug!(category_id, "occupancy requested for unknown category");
            return Occupancy::default();
        };

        let occupied = self
            .store
            .bookings()
            .iter()
            .filter(|b| holds_unit(b, category_id, as_of))
            .count() as u32;

        Occupancy::new(occupied, category.total_units)
    }

    pub fn is_available(&self, category_id: &str, as_of: NaiveDate) -> bool {
        self.occupancy_of(category_id, as_of).available > 0
    }

    // One row per catalog category, in catalog order
    pub fn availability_report(&self, as_of: NaiveDate) -> Vec<CategoryAvailability> {
        self.catalog
            .categories()
            .iter()
            .map(|category| {
                let occupancy = self.occupancy_of(&category.id, as_of);
                if occupancy.is_overbooked() {
                    warn!(
                        category_id = %category.id,
                        occupied = occupancy.occupied,
                        total = occupancy.total,
                        %as_of,
                        "category overbooked"
                    );
                }
                CategoryAvailability {
                    category_id: category.id.clone(),
                    category: category.clone(),
                    occupied: occupancy.occupied,
                    total: occupancy.total,
                    available: occupancy.available,
                }
            })
            .collect()
    }
}
