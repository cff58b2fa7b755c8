use chrono::NaiveDate;
use crate::domain::models::reservation::Reservation;
use crate::domain::models::slot::{Slot, TurnStatus};

/// Projects the bookable state of every turn on `date` from the raw slot
/// rows and the reservations that hold quota against them. Reads nothing
/// and writes nothing; callers supply both sets.
pub fn project_day(
    date: NaiveDate,
    slots: &[Slot],
    reservations: &[Reservation],
    excluded_reservation_id: Option<&str>,
) -> Vec<TurnStatus> {
    slots
        .iter()
        .filter(|slot| slot.date == date)
        .map(|slot| {
            let reserved_guests: i32 = reservations
                .iter()
                .filter(|r| {
                    r.date == date
                        && r.language == slot.language
                        && r.occupies_quota()
                        && excluded_reservation_id.is_none_or(|ex| r.id != ex)
                })
                .map(|r| r.guest_count)
                .sum();

            TurnStatus {
                id: slot.id.clone(),
                start_time: slot.start_time,
                language: slot.language.clone(),
                is_available: slot.is_available,
                is_blocked: slot.is_blocked,
                quotas_closed: slot.quotas_closed,
                block_reason: slot.block_reason.clone(),
                max_capacity: slot.max_capacity,
                reserved_guests,
                remaining_capacity: slot.effective_remaining(reserved_guests),
            }
        })
        .collect()
}
