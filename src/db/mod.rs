pub mod connection;
pub mod jobs;

pub use connection::{init_db, Database};
