// Booking store
// In-memory collections of guests, dependents, rooms, custom accommodations and bookings

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::builder::CustomAccommodation;
use crate::models::{Booking, BookingStatus, Dependent, Guest, Room};

#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    guests: Vec<Guest>,
    dependents: Vec<Dependent>,
    rooms: Vec<Room>,
    custom_accommodations: Vec<CustomAccommodation>,
    bookings: Vec<Booking>,
}

// Apply `update` to the record whose id matches; returns whether one did
fn update_by_id<T>(
    records: &mut [T],
    id: &str,
    id_of: impl Fn(&T) -> &str,
    update: impl FnOnce(&mut T),
) -> bool {
    match records.iter_mut().find(|r| id_of(r) == id) {
        Some(record) => {
            update(record);
            true
        }
        None => false,
    }
}

fn remove_by_id<T>(records: &mut Vec<T>, id: &str, id_of: impl Fn(&T) -> &str) -> Option<T> {
    let pos = records.iter().position(|r| id_of(r) == id)?;
    Some(records.remove(pos))
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Guests

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn guest(&self, id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    pub fn add_guest(&mut self, guest: Guest) {
        debug!(guest_id = %guest.id, "guest added");
        self.guests.push(guest);
    }

    pub fn update_guest(&mut self, id: &str, update: impl FnOnce(&mut Guest)) -> bool {
        update_by_id(&mut self.guests, id, |g| g.id.as_str(), update)
    }

    // Removes the guest together with their bookings and dependents
    pub fn delete_guest(&mut self, id: &str) -> Option<Guest> {
        let removed = remove_by_id(&mut self.guests, id, |g| g.id.as_str());
        let bookings_before = self.bookings.len();
        let dependents_before = self.dependents.len();
        self.bookings.retain(|b| b.guest_id != id);
        self.dependents.retain(|d| d.guest_id != id);
        info!(
            guest_id = id,
            bookings_removed = bookings_before - self.bookings.len(),
            dependents_removed = dependents_before - self.dependents.len(),
            "guest deleted"
        );
        removed
    }

    // Dependents

    pub fn dependents(&self) -> &[Dependent] {
        &self.dependents
    }

    pub fn dependents_of<'a>(&'a self, guest_id: &'a str) -> impl Iterator<Item = &'a Dependent> + 'a {
        self.dependents.iter().filter(move |d| d.guest_id == guest_id)
    }

    pub fn add_dependent(&mut self, dependent: Dependent) {
        debug!(dependent_id = %dependent.id, guest_id = %dependent.guest_id, "dependent added");
        self.dependents.push(dependent);
    }

    pub fn update_dependent(&mut self, id: &str, update: impl FnOnce(&mut Dependent)) -> bool {
        update_by_id(&mut self.dependents, id, |d| d.id.as_str(), update)
    }

    pub fn delete_dependent(&mut self, id: &str) -> Option<Dependent> {
        remove_by_id(&mut self.dependents, id, |d| d.id.as_str())
    }

    // Rooms

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn add_room(&mut self, room: Room) {
        debug!(room_id = %room.id, number = %room.number, "room added");
        self.rooms.push(room);
    }

    pub fn update_room(&mut self, id: &str, update: impl FnOnce(&mut Room)) -> bool {
        update_by_id(&mut self.rooms, id, |r| r.id.as_str(), update)
    }

    // Removes the room and every booking made for it
    pub fn delete_room(&mut self, id: &str) -> Option<Room> {
        let removed = remove_by_id(&mut self.rooms, id, |r| r.id.as_str());
        let before = self.bookings.len();
        self.bookings.retain(|b| b.room_id != id);
        info!(
            room_id = id,
            bookings_removed = before - self.bookings.len(),
            "room deleted"
        );
        removed
    }

    // Custom accommodations

    pub fn custom_accommodations(&self) -> &[CustomAccommodation] {
        &self.custom_accommodations
    }

    pub fn add_custom_accommodation(&mut self, accommodation: CustomAccommodation) {
        debug!(accommodation_id = %accommodation.id, "custom accommodation added");
        self.custom_accommodations.push(accommodation);
    }

    pub fn update_custom_accommodation(
        &mut self,
        id: &str,
        update: impl FnOnce(&mut CustomAccommodation),
    ) -> bool {
        update_by_id(&mut self.custom_accommodations, id, |a| a.id.as_str(), update)
    }

    pub fn delete_custom_accommodation(&mut self, id: &str) -> Option<CustomAccommodation> {
        remove_by_id(&mut self.custom_accommodations, id, |a| a.id.as_str())
    }

    // Bookings

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn add_booking(&mut self, booking: Booking) {
        info!(
            booking_id = %booking.id,
            category_id = booking.category_id().unwrap_or("-"),
            check_in = %booking.check_in,
            check_out = %booking.check_out,
            "booking added"
        );
        self.bookings.push(booking);
    }

    pub fn update_booking(&mut self, id: &str, update: impl FnOnce(&mut Booking)) -> bool {
        update_by_id(&mut self.bookings, id, |b| b.id.as_str(), update)
    }

    pub fn set_booking_status(&mut self, id: &str, status: BookingStatus) -> bool {
        let updated = self.update_booking(id, |b| b.status = status);
        if updated {
            info!(booking_id = id, ?status, "booking status changed");
        }
        updated
    }

    pub fn delete_booking(&mut self, id: &str) -> Option<Booking> {
        let removed = remove_by_id(&mut self.bookings, id, |b| b.id.as_str());
        if removed.is_some() {
            info!(booking_id = id, "booking deleted");
        }
        removed
    }
}

/// A booking store behind a single writer lock, for callers that share one
/// hotel between threads.
///
/// Every closure runs under one lock acquisition, so a read (an availability
/// report, say) never observes a half-applied sequence of writes issued from
/// a single `write` call.
#[derive(Debug, Clone, Default)]
pub struct SharedBookingStore {
    inner: Arc<RwLock<BookingStore>>,
}

impl SharedBookingStore {
    pub fn new(store: BookingStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&BookingStore) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut BookingStore) -> R) -> R {
        f(&mut self.inner.write())
    }

    // Owned copy of the current state
    pub fn snapshot(&self) -> BookingStore {
        self.inner.read().clone()
    }
}
