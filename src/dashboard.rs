// Dashboard projection
// Headline numbers, today's arrivals and departures, and room alerts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::HotelConfig;
use crate::models::{Booking, BookingStatus, RoomStatus};
use crate::store::BookingStore;

const UNKNOWN_GUEST: &str = "Hóspede Desconhecido";
const UNKNOWN_ROOM: &str = "Quarto Desconhecido";
const UPCOMING_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_guests: usize,
    pub total_rooms: usize,
    pub total_bookings: usize,
    pub total_dependents: usize,
    // Percentage of rooms marked occupied, one decimal place
    pub occupancy_rate: f64,
    pub today_check_ins: usize,
    pub today_check_outs: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingMovement {
    pub booking_id: String,
    pub guest_name: String,
    pub room_number: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    Important,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub message: String,
    pub level: AlertLevel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStats {
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
    pub average_price: f64,
}

fn count_rooms(store: &BookingStore, status: RoomStatus) -> usize {
    store.rooms().iter().filter(|r| r.status == status).count()
}

pub fn dashboard_stats(store: &BookingStore, today: NaiveDate) -> DashboardStats {
    let total_rooms = store.rooms().len();
    let occupied_rooms = count_rooms(store, RoomStatus::Occupied);
    let occupancy_rate = if total_rooms > 0 {
        occupied_rooms as f64 / total_rooms as f64 * 100.0
    } else {
        0.0
    };

    let bookings = store.bookings();
    let today_check_ins = bookings
        .iter()
        .filter(|b| b.check_in == today && b.status == BookingStatus::Confirmed)
        .count();
    let today_check_outs = bookings
        .iter()
        .filter(|b| b.check_out == today && b.status == BookingStatus::CheckedIn)
        .count();
    let revenue = bookings
        .iter()
        .filter(|b| matches!(b.status, BookingStatus::CheckedIn | BookingStatus::CheckedOut))
        .map(|b| b.total_price)
        .sum();

    DashboardStats {
        total_guests: store.guests().len(),
        total_rooms,
        total_bookings: bookings.len(),
        total_dependents: store.dependents().len(),
        occupancy_rate: (occupancy_rate * 10.0).round() / 10.0,
        today_check_ins,
        today_check_outs,
        revenue,
    }
}

fn upcoming(
    store: &BookingStore,
    time: &str,
    is_due: impl Fn(&Booking) -> bool,
) -> Vec<UpcomingMovement> {
    store
        .bookings()
        .iter()
        .filter(|b| is_due(b))
        .take(UPCOMING_LIMIT)
        .map(|b| UpcomingMovement {
            booking_id: b.id.clone(),
            guest_name: store
                .guest(&b.guest_id)
                .map_or_else(|| UNKNOWN_GUEST.to_string(), |g| g.name.clone()),
            room_number: store
                .room(&b.room_id)
                .map_or_else(|| UNKNOWN_ROOM.to_string(), |r| r.number.clone()),
            time: time.to_string(),
        })
        .collect()
}

// Confirmed bookings arriving today
pub fn upcoming_check_ins(
    store: &BookingStore,
    config: &HotelConfig,
    today: NaiveDate,
) -> Vec<UpcomingMovement> {
    upcoming(store, &config.check_in_time, |b| {
        b.check_in == today && b.status == BookingStatus::Confirmed
    })
}

// Checked-in bookings leaving today
pub fn upcoming_check_outs(
    store: &BookingStore,
    config: &HotelConfig,
    today: NaiveDate,
) -> Vec<UpcomingMovement> {
    upcoming(store, &config.check_out_time, |b| {
        b.check_out == today && b.status == BookingStatus::CheckedIn
    })
}

pub fn alerts(store: &BookingStore, config: &HotelConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let maintenance = count_rooms(store, RoomStatus::Maintenance);
    if maintenance > 0 {
        alerts.push(Alert {
            id: "maintenance".to_string(),
            message: format!("{} quarto(s) em manutenção", maintenance),
            level: AlertLevel::Warning,
        });
    }

    let available = count_rooms(store, RoomStatus::Available);
    if available <= config.low_availability_threshold && !store.rooms().is_empty() {
        alerts.push(Alert {
            id: "availability".to_string(),
            message: format!("Apenas {} quartos disponíveis", available),
            level: AlertLevel::Important,
        });
    }

    if store.guests().is_empty() && store.rooms().is_empty() {
        alerts.push(Alert {
            id: "welcome".to_string(),
            message: "Bem-vindo! Comece adicionando quartos e hóspedes ao seu hotel.".to_string(),
            level: AlertLevel::Info,
        });
    }

    alerts
}

pub fn room_stats(store: &BookingStore) -> RoomStats {
    let rooms = store.rooms();
    let average_price = if rooms.is_empty() {
        0.0
    } else {
        rooms.iter().map(|r| r.price).sum::<f64>() / rooms.len() as f64
    };
    RoomStats {
        available: count_rooms(store, RoomStatus::Available),
        occupied: count_rooms(store, RoomStatus::Occupied),
        maintenance: count_rooms(store, RoomStatus::Maintenance),
        average_price,
    }
}
