use std::sync::Arc;
use crate::domain::ports::{ReservationRepository, SettingsRepository, SlotRepository};
use crate::domain::services::admission::AdmissionService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub slot_repo: Arc<dyn SlotRepository>,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub settings_repo: Arc<dyn SettingsRepository>,
    pub admission_service: Arc<AdmissionService>,
}
