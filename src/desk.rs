// Booking desk
// The confirm-a-quote flow: availability check, accommodation snapshot, booking record

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

use crate::availability::AvailabilityCalculator;
use crate::builder::{AccommodationQuote, CustomAccommodation, CustomizationBuilder};
use crate::catalog::CategoryCatalog;
use crate::error::{HotelError, Result};
use crate::models::{new_id, Booking};
use crate::store::{BookingStore, SharedBookingStore};

// Who stays where and when; guest and room ids are not checked against the store
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub guest_id: String,
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub dependent_ids: Vec<String>,
}

pub struct BookingDesk<'a> {
    catalog: &'a CategoryCatalog,
}

impl<'a> BookingDesk<'a> {
    pub fn new(catalog: &'a CategoryCatalog) -> Self {
        Self { catalog }
    }

    pub fn start_quote(&self, category_id: &str) -> Result<CustomizationBuilder> {
        CustomizationBuilder::create(self.catalog, category_id)
    }

    /// Records a confirmed booking for `quote`.
    ///
    /// Refuses with `CategoryUnavailable` when the category has no free unit on
    /// the check-in date. The accommodation snapshot is stored alongside the
    /// booking and the booking is priced at nightly price times nights.
    pub fn book(
        &self,
        store: &mut BookingStore,
        request: BookingRequest,
        quote: AccommodationQuote,
        now: DateTime<Utc>,
    ) -> Result<Booking> {
        let category_id = self.catalog.lookup(&quote.category.id)?.id.clone();

        let calculator = AvailabilityCalculator::new(self.catalog, store);
        if !calculator.is_available(&category_id, request.check_in) {
            warn!(
                category_id = %category_id,
                check_in = %request.check_in,
                "booking refused, category unavailable"
            );
            return Err(HotelError::CategoryUnavailable(category_id));
        }

        let accommodation = CustomAccommodation::from_quote(new_id("accommodation"), quote, now);
        store.add_custom_accommodation(accommodation.clone());

        let mut booking = Booking::from_accommodation(
            new_id("booking"),
            request.guest_id,
            request.room_id,
            request.check_in,
            request.check_out,
            accommodation,
        );
        booking.dependent_ids = request.dependent_ids;
        info!(
            booking_id = %booking.id,
            category_id = %category_id,
            nights = booking.nights(),
            total_price = booking.total_price,
            "booking confirmed"
        );
        store.add_booking(booking.clone());

        Ok(booking)
    }

    // Check and insert under one write lock
    pub fn book_shared(
        &self,
        store: &SharedBookingStore,
        request: BookingRequest,
        quote: AccommodationQuote,
        now: DateTime<Utc>,
    ) -> Result<Booking> {
        store.write(|store| self.book(store, request, quote, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AccommodationCategory;
    use crate::models::{parse_date, BookingStatus};
    use std::sync::Arc;
    use std::thread;

    fn request(check_in: &str, check_out: &str) -> BookingRequest {
        BookingRequest {
            guest_id: "g1".to_string(),
            room_id: "r1".to_string(),
            check_in: parse_date(check_in).unwrap(),
            check_out: parse_date(check_out).unwrap(),
            dependent_ids: vec!["d1".to_string()],
        }
    }

    fn small_catalog(units: u32) -> CategoryCatalog {
        let mut category: AccommodationCategory = CategoryCatalog::standard()
            .lookup("single-simple")
            .unwrap()
            .clone();
        category.total_units = units;
        CategoryCatalog::new(vec![category])
    }

    #[test]
    fn test_book_records_accommodation_and_booking() {
        let catalog = CategoryCatalog::standard();
        let desk = BookingDesk::new(&catalog);
        let mut store = BookingStore::new();

        let quote = desk
            .start_quote("couple-simple")
            .unwrap()
            .with_extra_beds(1)
            .with_premium_amenities(["Vista para o Mar", "Sistema de Som"])
            .with_special_requests(["Quarto Silencioso"])
            .finalize();

        let booking = desk
            .book(&mut store, request("2024-01-10", "2024-01-13"), quote, Utc::now())
            .unwrap();

        assert!(booking.id.starts_with("booking-"));
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.total_price, 600.0);
        assert_eq!(booking.dependent_ids, vec!["d1".to_string()]);

        let accommodation = booking.custom_accommodation.as_ref().unwrap();
        assert_eq!(accommodation.total_price, 200.0);
        assert_eq!(store.custom_accommodations(), std::slice::from_ref(accommodation));
        assert_eq!(store.booking(&booking.id), Some(&booking));
    }

    #[test]
    fn test_book_refuses_when_full() {
        let catalog = small_catalog(1);
        let desk = BookingDesk::new(&catalog);
        let mut store = BookingStore::new();

        let quote = desk.start_quote("single-simple").unwrap().finalize();
        desk.book(&mut store, request("2024-06-01", "2024-06-05"), quote.clone(), Utc::now())
            .unwrap();

        let result = desk.book(&mut store, request("2024-06-02", "2024-06-03"), quote.clone(), Utc::now());
        assert!(matches!(result, Err(HotelError::CategoryUnavailable(ref id)) if id == "single-simple"));
        assert_eq!(store.bookings().len(), 1);

        // the unit frees up on the check-out day
        assert!(desk
            .book(&mut store, request("2024-06-05", "2024-06-06"), quote, Utc::now())
            .is_ok());
    }

    #[test]
    fn test_book_unknown_category() {
        let catalog = small_catalog(3);
        let standard = CategoryCatalog::standard();
        let quote = BookingDesk::new(&standard)
            .start_quote("family-super")
            .unwrap()
            .finalize();

        let mut store = BookingStore::new();
        let result = BookingDesk::new(&catalog).book(&mut store, request("2024-06-01", "2024-06-02"), quote, Utc::now());
        assert!(matches!(result, Err(HotelError::CategoryNotFound(_))));
        assert!(store.bookings().is_empty());
        assert!(store.custom_accommodations().is_empty());
    }

    #[test]
    fn test_book_shared_never_overbooks() {
        let catalog = Arc::new(small_catalog(5));
        let store = SharedBookingStore::default();

        let mut handles = vec![];
        for _ in 0..10 {
            let catalog = Arc::clone(&catalog);
            let store = store.clone();
            handles.push(thread::spawn(move || {
                let desk = BookingDesk::new(&catalog);
                let quote = desk.start_quote("single-simple").unwrap().finalize();
                desk.book_shared(&store, request("2024-07-01", "2024-07-03"), quote, Utc::now())
                    .is_ok()
            }));
        }

        let confirmed = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(confirmed, 5);
        assert_eq!(store.read(|s| s.bookings().len()), 5);
    }
}
