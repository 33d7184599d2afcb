pub mod idealized;
pub mod patient;
