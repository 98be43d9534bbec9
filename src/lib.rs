// Hotel back-office core: accommodation customization, pricing and availability

pub mod availability;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod desk;
pub mod error;
pub mod models;
pub mod search;
pub mod store;

// Re-export key types for convenience
pub use availability::{AvailabilityCalculator, CategoryAvailability, Occupancy};
pub use builder::{
    nightly_price, stay_nights, stay_price, AccommodationQuote, CustomAccommodation,
    CustomizationBuilder, Customizations, EXTRA_BED_SURCHARGE, PREMIUM_AMENITY_SURCHARGE,
};
pub use catalog::{AccommodationCategory, CategoryCatalog};
pub use config::HotelConfig;
pub use dashboard::{Alert, AlertLevel, DashboardStats, RoomStats, UpcomingMovement};
pub use desk::{BookingDesk, BookingRequest};
pub use error::{HotelError, Result};
pub use models::{
    new_id, parse_date, Booking, BookingStatus, Dependent, Guest, Relationship, Room, RoomStatus,
    RoomType,
};
pub use search::{GuestFilter, RoomFilter};
pub use store::{BookingStore, SharedBookingStore};
