pub mod day;
pub mod health;
pub mod reservation;
pub mod settings;
pub mod slot;
pub mod validation;
