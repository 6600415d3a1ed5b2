//! Seat picks: turning a selected section into concrete tickets.
//!
//! Venue maps only describe the shape of a section, not individual seats,
//! so row and seat numbers are cosmetic and drawn at random. Both the random
//! source and the ticket id allocator are injected so callers (and tests)
//! control determinism.

#[cfg(test)]
#[path = "picks_test.rs"]
mod picks_test;

use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::section::Section;

/// Allocates ticket ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> Uuid;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Predictable ids counting up from a starting value.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    #[must_use]
    pub fn starting_at(next: u128) -> Self {
        Self { next }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// One ticket in a section, priced at the section's current price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatPick {
    pub ticket_id: Uuid,
    pub section_id: String,
    /// 1-based row number.
    pub row: u32,
    /// 1-based seat number within the row.
    pub seat: u32,
    pub price: f64,
}

/// Pick `quantity` distinct seats in `section`.
///
/// Unavailable sections and zero quantities yield nothing. The quantity is
/// capped at the section's capacity (the smaller of its seat grid and any
/// explicit total). Picks are ordered by row, then seat.
pub fn pick_seats<R, I>(section: &Section, quantity: usize, rng: &mut R, ids: &mut I) -> Vec<SeatPick>
where
    R: Rng + ?Sized,
    I: IdGenerator + ?Sized,
{
    if !section.available || quantity == 0 || section.seats_per_row == 0 {
        return Vec::new();
    }
    let Ok(grid) = usize::try_from(section.grid_seats()) else {
        return Vec::new();
    };
    let capacity = section
        .total_seats
        .map_or(section.grid_seats(), |t| u64::from(t).min(section.grid_seats()));
    let amount = quantity.min(usize::try_from(capacity).unwrap_or(grid));
    if amount < quantity {
        tracing::debug!(section_id = %section.id, quantity, capacity, "seat request capped at capacity");
    }

    let per_row = section.seats_per_row as usize;
    let mut seats: Vec<(u32, u32)> = rand::seq::index::sample(rng, grid, amount)
        .into_iter()
        .map(|idx| {
            let row = u32::try_from(idx / per_row + 1).unwrap_or(u32::MAX);
            let seat = u32::try_from(idx % per_row + 1).unwrap_or(u32::MAX);
            (row, seat)
        })
        .collect();
    seats.sort_unstable();

    seats
        .into_iter()
        .map(|(row, seat)| SeatPick {
            ticket_id: ids.next_id(),
            section_id: section.id.clone(),
            row,
            seat,
            price: section.current_price,
        })
        .collect()
}
