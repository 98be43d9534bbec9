// Back-office records: guests, dependents, rooms and bookings

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::builder::{stay_nights, stay_price, CustomAccommodation};
use crate::error::{HotelError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Parse a `YYYY-MM-DD` date coming from a form or a JSON payload
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| HotelError::InvalidDate(format!("{}: {}", value, e)))
}

// Helper for generating record ids, e.g. `booking-3840212`
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, rand::random::<u32>())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub address: String,
    pub birth_date: String,
    pub nationality: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Spouse,
    Child,
    Parent,
    Sibling,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependent {
    pub id: String,
    pub guest_id: String,
    pub name: String,
    pub document: String,
    pub birth_date: String,
    pub relationship: Relationship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_needs: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    // Price per night
    pub price: f64,
    pub capacity: u32,
    pub description: String,
    pub status: RoomStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    // Active bookings are the ones that hold a unit
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub guest_id: String,
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_accommodation: Option<CustomAccommodation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependent_ids: Vec<String>,
}

impl Booking {
    /// A confirmed booking priced as the accommodation's nightly price times
    /// the number of nights between the two dates.
    pub fn from_accommodation(
        id: String,
        guest_id: String,
        room_id: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
        accommodation: CustomAccommodation,
    ) -> Self {
        let nights = stay_nights(check_in, check_out);
        Self {
            id,
            guest_id,
            room_id,
            check_in,
            check_out,
            status: BookingStatus::Confirmed,
            total_price: stay_price(accommodation.total_price, nights),
            custom_accommodation: Some(accommodation),
            dependent_ids: Vec::new(),
        }
    }

    pub fn nights(&self) -> i64 {
        stay_nights(self.check_in, self.check_out)
    }

    // Check-in day counts, check-out day doesn't
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    pub fn category_id(&self) -> Option<&str> {
        self.custom_accommodation.as_ref().map(|a| a.category_id())
    }
}
