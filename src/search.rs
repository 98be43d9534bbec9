// Guest and room search filters used by the listing screens

use crate::models::{Guest, Room, RoomStatus, RoomType};

#[derive(Debug, Clone, Default)]
pub struct GuestFilter {
    pub search: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub search: Option<String>,
    pub room_type: Option<RoomType>,
    pub status: Option<RoomStatus>,
}

// Empty search text matches everything
fn search_term(search: &Option<String>) -> Option<&str> {
    search.as_deref().filter(|s| !s.is_empty())
}

impl GuestFilter {
    // Name and email ignore case; document and phone must match as typed
    pub fn matches(&self, guest: &Guest) -> bool {
        let matches_search = search_term(&self.search).map_or(true, |term| {
            let lower = term.to_lowercase();
            guest.name.to_lowercase().contains(&lower)
                || guest.email.to_lowercase().contains(&lower)
                || guest.document.contains(term)
                || guest.phone.contains(term)
        });

        let matches_nationality = self
            .nationality
            .as_ref()
            .filter(|n| !n.is_empty())
            .map_or(true, |n| &guest.nationality == n);

        matches_search && matches_nationality
    }
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        let matches_search = search_term(&self.search).map_or(true, |term| {
            let lower = term.to_lowercase();
            room.number.to_lowercase().contains(&lower)
                || room.description.to_lowercase().contains(&lower)
                || room.room_type.as_str().contains(&lower)
        });

        matches_search
            && self.room_type.map_or(true, |t| room.room_type == t)
            && self.status.map_or(true, |s| room.status == s)
    }
}

pub fn filter_guests<'a>(guests: &'a [Guest], filter: &GuestFilter) -> Vec<&'a Guest> {
    guests.iter().filter(|g| filter.matches(g)).collect()
}

pub fn filter_rooms<'a>(rooms: &'a [Room], filter: &RoomFilter) -> Vec<&'a Room> {
    rooms.iter().filter(|r| filter.matches(r)).collect()
}

// Distinct nationalities, sorted, for the filter drop-down
pub fn nationalities(guests: &[Guest]) -> Vec<String> {
    let mut values: Vec<String> = guests.iter().map(|g| g.nationality.clone()).collect();
    values.sort();
    values.dedup();
    values
}
