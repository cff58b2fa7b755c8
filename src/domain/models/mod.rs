pub mod reservation;
pub mod settings;
pub mod slot;
