pub mod admission;
pub mod availability;
