pub mod clock;
pub mod database;
pub mod error;
