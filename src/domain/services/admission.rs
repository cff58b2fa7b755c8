use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::ports::{ReservationRepository, SlotRepository};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum AdmissionDecision {
    Permitted { remaining_capacity: i32 },
    Denied { category: DenialCategory, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialCategory {
    NotFound,
    Blocked,
    QuotasClosed,
    Unavailable,
    Full,
}

/// Decides whether one more reservation may enter a turn. Every call
/// re-reads the store; the decision reflects the state at the moment of
/// that read. Party size is not considered: a turn admits as long as at
/// least one seat remains.
pub struct AdmissionService {
    slot_repo: Arc<dyn SlotRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
}

impl AdmissionService {
    pub fn new(
        slot_repo: Arc<dyn SlotRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self { slot_repo, reservation_repo }
    }

    pub async fn check(
        &self,
        date: NaiveDate,
        language: &str,
        excluded_reservation_id: Option<&str>,
    ) -> Result<AdmissionDecision, AppError> {
        let Some(slot) = self
            .slot_repo
            .find_by_date_and_language(date, language)
            .await?
        else {
            return Ok(AdmissionDecision::Denied {
                category: DenialCategory::NotFound,
                reason: "This slot does not exist.".to_string(),
            });
        };

        if slot.is_blocked {
            let reason = slot
                .block_reason
                .clone()
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| "This day is blocked.".to_string());
            return Ok(AdmissionDecision::Denied {
                category: DenialCategory::Blocked,
                reason,
            });
        }

        if slot.quotas_closed {
            return Ok(AdmissionDecision::Denied {
                category: DenialCategory::QuotasClosed,
                reason: "Quotas are closed.".to_string(),
            });
        }

        if !slot.is_available {
            return Ok(AdmissionDecision::Denied {
                category: DenialCategory::Unavailable,
                reason: "This slot is not available.".to_string(),
            });
        }

        let holders = self
            .reservation_repo
            .list_active_for_turn(date, language, excluded_reservation_id)
            .await?;
        let reserved_guests: i32 = holders.iter().map(|r| r.guest_count).sum();

        let remaining = slot.effective_remaining(reserved_guests);
        if remaining <= 0 {
            return Ok(AdmissionDecision::Denied {
                category: DenialCategory::Full,
                reason: "No remaining capacity.".to_string(),
            });
        }

        Ok(AdmissionDecision::Permitted { remaining_capacity: remaining })
    }
}
